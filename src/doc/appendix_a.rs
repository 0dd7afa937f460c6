/*!
# Errors

Errors print in bold and stop the program with exit status 1. The line and
column of the offending source are shown when known.

```text
SYNTAX ERROR IN 1 (9..13); expected RPAREN but found THEN `then`
```

## UNEXPECTED CHARACTER
A character that cannot start any token, such as `@` or an unterminated
string.

## SYNTAX ERROR
The tokens do not form a program. The message names what was expected.

## NO MAIN FUNCTION
Nothing named `main` was defined.

## INPUT PAST END
`iread` found its input closed.

## FILE NOT FOUND
The file named on the command line could not be opened.

## BREAK
CTRL-C was pressed.

## INTERNAL ERROR
Anything else, usually an I/O failure on the terminal.

*/
