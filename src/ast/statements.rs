use super::expressions::Expr;

/// One `elseif cond then body` arm of an if statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIfBranch {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// Statement node. A program is an ordered `Vec<Stmt>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A call, or a named function definition, used as a statement.
    Expression(Expr),
    Assignment {
        target: String,
        value: Expr,
    },
    LocalDeclaration {
        name: String,
        initializer: Option<Expr>,
    },
    Return {
        values: Vec<Expr>,
    },
    If {
        condition: Expr,
        then_body: Vec<Stmt>,
        elseif_branches: Vec<ElseIfBranch>,
        else_body: Vec<Stmt>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    /// Body runs first; the loop repeats while `condition` is false.
    Repeat {
        body: Vec<Stmt>,
        condition: Expr,
    },
    /// Numeric `for variable = start, end[, step]`.
    For {
        variable: String,
        start: Expr,
        end: Expr,
        step: Option<Expr>,
        body: Vec<Stmt>,
    },
    /// Generic `for key[, value] in iterator`.
    ForIn {
        key_variable: String,
        value_variable: Option<String>,
        iterator: Expr,
        body: Vec<Stmt>,
    },
}

impl Stmt {
    /// Conditions of the elseif arms, in source order. Empty for non-if statements.
    pub fn elseif_conditions(&self) -> Vec<&Expr> {
        self.elseif_branches()
            .iter()
            .map(|branch| &branch.condition)
            .collect()
    }

    /// Bodies of the elseif arms, in source order. Empty for non-if statements.
    pub fn elseif_bodies(&self) -> Vec<&[Stmt]> {
        self.elseif_branches()
            .iter()
            .map(|branch| branch.body.as_slice())
            .collect()
    }

    fn elseif_branches(&self) -> &[ElseIfBranch] {
        match self {
            Stmt::If {
                elseif_branches, ..
            } => elseif_branches.as_slice(),
            _ => &[],
        }
    }
}
