/*!
# Introductory Tutorial for funscript

A funscript program is a text file of function definitions. Only the one
named `main` ever runs. Save the following as `hello.fun`.

```text
def main() then
    print "Hello World"
end
```

Run it by passing the file name to the executable.

<pre><code>&nbsp;$ funscript hello.fun
&nbsp;Hello World
</code></pre>

Without a file name you get a usage message and an exit status of 1.

Variables hold strings. `let` binds one, either to a literal or to the
current value of another variable. A variable that was never bound reads as
the empty string, so this prints an empty line and then `hello`.

```text
def main() then
    print x
    let x := "hello"
    print x
end
```

`iread` shows a prompt and waits for one line of input. The line always
lands in the variable `_`.

<pre><code>&nbsp;def main() then
&nbsp;    iread "Name: "
&nbsp;    print _
&nbsp;end
&nbsp;$ funscript name.fun
&nbsp;Name: Bob
&nbsp;Bob
</code></pre>

`return` ends the program early. There are no other control flow statements.

The last statement is the strange one. `unsafe asm` assembles 32-bit x86
instructions, runs them on a private virtual CPU, and prints the value left
in EAX. See the chapter on inline assembly.

```text
def main() then
    unsafe asm """
        mov eax, 5
        add eax, 3
    """
end
```

<pre><code>&nbsp;EAX after execution = 8
</code></pre>

Stop a running program with CTRL-C.

*/
