use crate::lexer::tokens::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.value.clone();
        Identifier { token, value }
    }

    pub fn token_literal(&self) -> &str {
        &self.token.value
    }
}
