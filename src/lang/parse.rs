use super::ast::{Expression, Function, Program, Statement};
use super::token::{Kind, Token};
use super::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Program> {
    Parser::parse(tokens)
}

static EOF: Token = Token {
    kind: Kind::Eof,
    lexeme: String::new(),
    line: None,
    column: 0..0,
};

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    current: &'a Token,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Program> {
        let mut token_stream = tokens.iter();
        let current = token_stream.next().unwrap_or(&EOF);
        let mut parse = Parser {
            token_stream,
            current,
        };
        let mut program = Program::default();
        loop {
            match parse.current.kind {
                Kind::Def => program.functions.push(parse.function()?),
                Kind::Eof => return Ok(program),
                _ => return Err(parse.expected("DEF")),
            }
        }
    }

    fn line(&self) -> usize {
        self.current.line.unwrap_or_default()
    }

    fn next(&mut self) -> &'a Token {
        let token = self.current;
        self.current = self.token_stream.next().unwrap_or(&EOF);
        token
    }

    fn expected(&self, what: &str) -> Error {
        let msg = format!("expected {} but found {}", what, self.current);
        error!(SyntaxError, self.current.line, ..&self.current.column; msg)
    }

    fn expect(&mut self, kind: Kind) -> Result<&'a Token> {
        if self.current.kind == kind {
            Ok(self.next())
        } else {
            Err(self.expected(&kind.to_string()))
        }
    }

    fn function(&mut self) -> Result<Function> {
        let line = self.line();
        self.expect(Kind::Def)?;
        let name = self.expect(Kind::Ident)?.lexeme.as_str().into();
        // The opening parenthesis is optional but the closing one is not.
        if self.current.kind == Kind::LParen {
            self.next();
        }
        self.expect(Kind::RParen)?;
        self.expect(Kind::Then)?;
        let mut body: Vec<Statement> = vec![];
        while self.current.kind != Kind::End {
            body.push(self.statement()?);
        }
        self.expect(Kind::End)?;
        Ok(Function {
            line,
            name,
            body: body.into(),
        })
    }

    fn statement(&mut self) -> Result<Statement> {
        let line = self.line();
        match self.current.kind {
            Kind::Print => {
                self.next();
                Statement::r#print(self, line)
            }
            Kind::Iread => {
                self.next();
                Statement::r#iread(self, line)
            }
            Kind::Let => {
                self.next();
                Statement::r#let(self, line)
            }
            Kind::Unsafe => {
                self.next();
                Statement::r#asm(self, line)
            }
            Kind::Return => {
                self.next();
                Ok(Statement::Return(line))
            }
            _ => Err(self.expected("statement")),
        }
    }
}

fn unquote(s: &str) -> Rc<str> {
    s.trim_matches('"').into()
}

impl Statement {
    fn r#print(parse: &mut Parser, line: usize) -> Result<Statement> {
        match parse.current.kind {
            Kind::String => Ok(Statement::Print(line, unquote(&parse.next().lexeme))),
            Kind::Ident => Ok(Statement::PrintVar(line, parse.next().lexeme.as_str().into())),
            _ => Err(parse.expected("STRING or IDENT after print")),
        }
    }

    fn r#iread(parse: &mut Parser, line: usize) -> Result<Statement> {
        let prompt = parse.expect(Kind::String)?;
        Ok(Statement::Iread(line, unquote(&prompt.lexeme)))
    }

    fn r#let(parse: &mut Parser, line: usize) -> Result<Statement> {
        let name = parse.expect(Kind::Ident)?.lexeme.as_str().into();
        parse.expect(Kind::Assign)?;
        let expr = match parse.current.kind {
            Kind::Ident => Expression::VarRef(parse.next().lexeme.as_str().into()),
            Kind::String => Expression::Literal(unquote(&parse.next().lexeme)),
            _ => return Err(parse.expected("IDENT or STRING after :=")),
        };
        Ok(Statement::LetVar(line, name, expr))
    }

    fn r#asm(parse: &mut Parser, line: usize) -> Result<Statement> {
        parse.expect(Kind::Asm)?;
        let text = &parse.expect(Kind::MultilineString)?.lexeme;
        Ok(Statement::AsmBlock(line, text.trim_matches('"').trim().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Program {
        match parse(&lex(s).unwrap()) {
            Ok(p) => p,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn body(s: &str) -> Vec<Statement> {
        let mut program = parse_str(s);
        assert_eq!(program.functions.len(), 1);
        program.functions.pop().unwrap().body.to_vec()
    }

    #[test]
    fn test_let_from_var_and_literal() {
        assert_eq!(
            body("def main() then let a := b let c := \"d\" end"),
            vec![
                Statement::LetVar(1, "a".into(), Expression::VarRef("b".into())),
                Statement::LetVar(1, "c".into(), Expression::Literal("d".into())),
            ]
        );
    }

    #[test]
    fn test_open_paren_is_optional() {
        assert_eq!(body("def main) then end"), vec![]);
    }

    #[test]
    fn test_close_paren_is_required() {
        let e = parse(&lex("def main then end").unwrap()).unwrap_err();
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN 1 (9..13); expected RPAREN but found THEN `then`"
        );
    }

    #[test]
    fn test_asm_payload_is_trimmed() {
        assert_eq!(
            body("def f() then unsafe asm \"\"\"\n  nop\n\"\"\" end"),
            vec![Statement::AsmBlock(1, "nop".into())]
        );
    }

    #[test]
    fn test_missing_end() {
        let e = parse(&lex("def main() then print \"x\"").unwrap()).unwrap_err();
        assert_eq!(e.to_string(), "SYNTAX ERROR; expected statement but found EOF");
    }

    #[test]
    fn test_trailing_tokens() {
        let e = parse(&lex("def main() then end junk").unwrap()).unwrap_err();
        assert_eq!(e.line_number(), Some(1));
        assert_eq!(e.column(), 20..24);
    }
}
