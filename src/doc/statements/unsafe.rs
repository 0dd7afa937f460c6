/*!
# `unsafe asm """<instructions>"""`

## Purpose
Run x86 machine code and print the resulting EAX.

## Remarks
Each block gets a new virtual CPU with fresh zeroed memory, so nothing a
block does can be seen by the next one. A block that fails to assemble or
faults prints `ASM execution failed:` with the reason and the program
carries on with the next statement.

See the inline assembly chapter for what a block may contain.

## Example
```text
unsafe asm """
    mov eax, 5
    add eax, 3
"""
unsafe asm """frobnicate"""
print "still here"
```
prints
```text
EAX after execution = 8
ASM execution failed: cannot assemble `frobnicate`: <assembler message>
still here
```
*/
