/*!
# `return`

## Purpose
Stop the program.

## Example
```text
def main() then
    print "shown"
    return
    print "never shown"
end
```
*/
