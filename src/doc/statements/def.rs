/*!
# `def <name>() then <statements> end`

## Purpose
Define a function.

## Remarks
Only the function named `main` is executed. If it is missing the program
stops with `NO MAIN FUNCTION` before anything runs.

Defining the same name twice is not an error. The later definition wins.

The opening parenthesis may be left out but the closing one is required,
so `def main) then` is accepted and `def main then` is a syntax error.

## Example
```text
def main() then
    print "first"
end
def main() then
    print "second"
end
```
prints `second`.
*/
