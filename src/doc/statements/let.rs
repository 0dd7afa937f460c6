/*!
# `let <variable> := "<string>" | <variable>`

## Purpose
Bind a variable.

## Remarks
The right side is either a string literal or another variable. A variable
that was never bound has the value `""`.

## Example
```text
let a := "x"
let b := a
let c := nothing
```
*/
