//! Token definitions for the Chai language.
//!
//! A [`Token`] pairs a [`TokenKind`] with an optional lexeme and the line the
//! token began on. Lexemes are only present for identifiers, type names and
//! literal values; every other kind is fully described by its kind.

use std::fmt;

/// The closed set of token categories produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Structure (synthesized from layout, never spelled in the source)
    /// One more level of indentation
    Indent,
    /// One less level of indentation
    Dedent,
    /// End of a physical line
    Newline,

    // Keywords
    /// `and`
    And,
    /// `assert`
    Assert,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `class`
    Class,
    /// `continue`
    Continue,
    /// `def`
    Def,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `for`
    For,
    /// `if`
    If,
    /// `in`
    In,
    /// `lambda`
    Lambda,
    /// `let`
    Let,
    /// `match`
    Match,
    /// `not`
    Not,
    /// `of`
    Of,
    /// `or`
    Or,
    /// `pass`
    Pass,
    /// `return`
    Return,
    /// `type`
    Type,
    /// `var`
    Var,
    /// `while`
    While,

    // Built-in type names and constants
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `String`
    String,
    /// `Bool`
    Bool,
    /// `Void`
    Void,
    /// `True`
    True,
    /// `False`
    False,

    // Operators and punctuation
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Divide,
    /// `*`
    Times,
    /// `%`
    Modulus,
    /// `**`
    Power,
    /// `//`
    IntDiv,
    /// `~`
    Complement,
    /// `<<`
    LShift,
    /// `>>`
    RShift,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `=`
    Assign,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `..`
    Elipsis,
    /// `|`
    Bar,
    /// `->`
    Arrow,
    /// `::`
    Cons,
    /// `_`
    Uscore,

    // Compound assignment
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    TimesAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `**=`
    PowerAssign,
    /// `//=`
    IntDivAssign,
    /// `<<=`
    LShiftAssign,
    /// `>>=`
    RShiftAssign,
    /// `&=`
    BitAndAssign,
    /// `|=`
    BitOrAssign,
    /// `^=`
    BitXorAssign,

    // Names and literal values (always carry a lexeme)
    /// A name starting with a lowercase letter
    IdName,
    /// A name starting with an uppercase letter
    TypeName,
    /// Integer literal, spelled as written (`42`, `0x1A`)
    IntVal,
    /// Float literal, spelled as written (`3.14e-2`)
    FloatVal,
    /// String literal with escapes resolved
    StringVal,

    /// End of input
    End,
}

impl TokenKind {
    /// Returns the stable upper-case identifier of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use chaic_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::PlusAssign.name(), "PLUSASSIGN");
    /// assert_eq!(TokenKind::IdName.name(), "IDNAME");
    /// ```
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Indent => "INDENT",
            Dedent => "DEDENT",
            Newline => "NEWLINE",
            And => "AND",
            Assert => "ASSERT",
            Break => "BREAK",
            Case => "CASE",
            Class => "CLASS",
            Continue => "CONTINUE",
            Def => "DEF",
            Elif => "ELIF",
            Else => "ELSE",
            For => "FOR",
            If => "IF",
            In => "IN",
            Lambda => "LAMBDA",
            Let => "LET",
            Match => "MATCH",
            Not => "NOT",
            Of => "OF",
            Or => "OR",
            Pass => "PASS",
            Return => "RETURN",
            Type => "TYPE",
            Var => "VAR",
            While => "WHILE",
            Int => "INT",
            Float => "FLOAT",
            String => "STRING",
            Bool => "BOOL",
            Void => "VOID",
            True => "TRUE",
            False => "FALSE",
            Plus => "PLUS",
            Minus => "MINUS",
            Divide => "DIVIDE",
            Times => "TIMES",
            Modulus => "MODULUS",
            Power => "POWER",
            IntDiv => "INTDIV",
            Complement => "COMPLEMENT",
            LShift => "LSHIFT",
            RShift => "RSHIFT",
            BitAnd => "BITAND",
            BitXor => "BITXOR",
            Less => "LESS",
            Greater => "GREATER",
            LessEq => "LESSEQ",
            GreaterEq => "GREATEREQ",
            Equals => "EQUALS",
            NotEquals => "NOTEQUALS",
            Colon => "COLON",
            Comma => "COMMA",
            Assign => "ASSIGN",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrack => "LBRACK",
            RBrack => "RBRACK",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            Elipsis => "ELIPSIS",
            Bar => "BAR",
            Arrow => "ARROW",
            Cons => "CONS",
            Uscore => "USCORE",
            PlusAssign => "PLUSASSIGN",
            MinusAssign => "MINUSASSIGN",
            TimesAssign => "TIMESASSIGN",
            DivAssign => "DIVASSIGN",
            ModAssign => "MODASSIGN",
            PowerAssign => "POWERASSIGN",
            IntDivAssign => "INTDIVASSIGN",
            LShiftAssign => "LSHIFTASSIGN",
            RShiftAssign => "RSHIFTASSIGN",
            BitAndAssign => "BITANDASSIGN",
            BitOrAssign => "BITORASSIGN",
            BitXorAssign => "BITXORASSIGN",
            IdName => "IDNAME",
            TypeName => "TYPENAME",
            IntVal => "INTVAL",
            FloatVal => "FLOATVAL",
            StringVal => "STRINGVAL",
            End => "END",
        }
    }

    /// Returns the fixed source spelling of this kind, if it has one.
    ///
    /// Structural kinds, names and literal values have no fixed spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use chaic_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::IntDivAssign.spelling(), Some("//="));
    /// assert_eq!(TokenKind::Int.spelling(), Some("Int"));
    /// assert_eq!(TokenKind::Indent.spelling(), None);
    /// ```
    pub const fn spelling(self) -> Option<&'static str> {
        use TokenKind::*;
        let text = match self {
            Indent | Dedent | Newline | IdName | TypeName | IntVal | FloatVal | StringVal | End => {
                return None
            },
            And => "and",
            Assert => "assert",
            Break => "break",
            Case => "case",
            Class => "class",
            Continue => "continue",
            Def => "def",
            Elif => "elif",
            Else => "else",
            For => "for",
            If => "if",
            In => "in",
            Lambda => "lambda",
            Let => "let",
            Match => "match",
            Not => "not",
            Of => "of",
            Or => "or",
            Pass => "pass",
            Return => "return",
            Type => "type",
            Var => "var",
            While => "while",
            Int => "Int",
            Float => "Float",
            String => "String",
            Bool => "Bool",
            Void => "Void",
            True => "True",
            False => "False",
            Plus => "+",
            Minus => "-",
            Divide => "/",
            Times => "*",
            Modulus => "%",
            Power => "**",
            IntDiv => "//",
            Complement => "~",
            LShift => "<<",
            RShift => ">>",
            BitAnd => "&",
            BitXor => "^",
            Less => "<",
            Greater => ">",
            LessEq => "<=",
            GreaterEq => ">=",
            Equals => "==",
            NotEquals => "!=",
            Colon => ":",
            Comma => ",",
            Assign => "=",
            LParen => "(",
            RParen => ")",
            LBrack => "[",
            RBrack => "]",
            LBrace => "{",
            RBrace => "}",
            Elipsis => "..",
            Bar => "|",
            Arrow => "->",
            Cons => "::",
            Uscore => "_",
            PlusAssign => "+=",
            MinusAssign => "-=",
            TimesAssign => "*=",
            DivAssign => "/=",
            ModAssign => "%=",
            PowerAssign => "**=",
            IntDivAssign => "//=",
            LShiftAssign => "<<=",
            RShiftAssign => ">>=",
            BitAndAssign => "&=",
            BitOrAssign => "|=",
            BitXorAssign => "^=",
        };
        Some(text)
    }

    /// Returns true for reserved words, including the built-in type names.
    pub const fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            And | Assert
                | Break
                | Case
                | Class
                | Continue
                | Def
                | Elif
                | Else
                | For
                | If
                | In
                | Lambda
                | Let
                | Match
                | Not
                | Of
                | Or
                | Pass
                | Return
                | Type
                | Var
                | While
                | Int
                | Float
                | String
                | Bool
                | Void
                | True
                | False
        )
    }

    /// Returns true for the kinds that always carry a lexeme.
    pub const fn has_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::IdName
                | TokenKind::TypeName
                | TokenKind::IntVal
                | TokenKind::FloatVal
                | TokenKind::StringVal
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single lexical token.
///
/// Tokens are built once by a scanning routine and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    lexeme: Option<String>,
    line: u32,
}

impl Token {
    /// Creates a token without a lexeme.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self {
            kind,
            lexeme: None,
            line,
        }
    }

    /// Creates a token carrying textual payload.
    pub fn with_lexeme(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: Some(lexeme.into()),
            line,
        }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The identifier spelling or literal value, if this kind has one.
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// The 1-based line the token began on.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true if this is the terminal token.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

/// Formats as `KIND` or `KIND(lexeme)`.
///
/// ```
/// use chaic_lex::{Token, TokenKind};
///
/// assert_eq!(Token::new(TokenKind::Colon, 1).to_string(), "COLON");
/// assert_eq!(Token::with_lexeme(TokenKind::IdName, "x", 1).to_string(), "IDNAME(x)");
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "{}({})", self.kind, lexeme),
            None => write!(f, "{}", self.kind),
        }
    }
}
