/*!
# `print "<string>" | <variable>`

## Purpose
Output one line to the terminal.

## Remarks
String literals are printed as written. Escape sequences are not
interpreted, and every `"` at either end of the literal is removed.

## Example
```text
print "Hello World"
print greeting
```
*/
