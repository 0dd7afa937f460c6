/*!
# Inline Assembly

The text between the triple quotes is Intel syntax 32-bit x86. Each line is
handed to the Keystone assembler and the bytes run on a Unicorn emulated
CPU. Blank lines are skipped and a `;` separates two instructions on the
same line.

## The machine

A 2 MiB region of zeroed memory is mapped at `0x1000000` and the block's
code is written at the start of it. Execution begins at the first byte and
ends when it runs off the last one. EAX and EBX start at zero, as does every
other register including ESP. Set up a stack yourself before using `push`,
`call` or `ret`:

```text
mov esp, 0x1200000
push 7
pop eax
```

The block's value is EAX.

## Instructions

Anything the assembler accepts in 32-bit mode: byte and word registers,
scaled index addressing such as `[ebx+ecx*4]`, shifts by `cl`, `movzx`,
rotates, string instructions and the rest of the integer set.

## Branches

Every line is assembled as if it started at address 0, so a branch target is
a byte offset from the start of the line containing the branch. This loop
sums 4+3+2+1 because `jnz -3` lands on the two byte `add` followed by the
one byte `dec`.

```text
mov ecx, 4
add eax, ecx
dec ecx
jnz -3
```

## Failures

These end the block with `ASM execution failed:` and the program continues.

 * A line the assembler rejects.
 * Touching memory outside the region, including `push` with ESP still zero.
 * Jumping outside the region.
 * A CPU exception such as division by zero or `int3`.
 * CTRL-C while the block is running.

A loop that never leaves the region runs until interrupted.

*/
