fn main() {
    funscript::term::main();
}
