#[derive(Debug, Clone, PartialEq)]
pub struct Program(pub Function); // program = function

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String, // "int" ident "(" "void" ")" "{" stmt "}"
    pub body: Stmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Return(Expr), // "return" expr ";"
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(i32), // int-literal
}
