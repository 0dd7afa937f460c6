/*!
# `iread "<prompt>"`

## Purpose
Read a line from the operator.

## Remarks
The prompt is shown without a newline. The line that comes back is stored
in `_` with its line ending removed. Every `iread` overwrites `_`.

If input ends before a line arrives the program stops with `INPUT PAST END`.

## Example
```text
def main() then
    iread "Name: "
    let name := _
    print name
end
```
*/
