//! Declaration model and output dialects

use clap::ValueEnum;

/// Placeholder root name used when no resource name is configured
pub const DEFAULT_ROOT_NAME: &str = "DEFAULT_TYPE";

/// Output dialect for generated declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Dialect {
    /// TypeScript `export interface` declarations (`.d.ts`)
    #[default]
    TypeScript,
    /// Flow declarations: TypeScript body behind a `// @flow` pragma (`.flow.js`)
    Flow,
    /// GraphQL SDL `type` declarations (`.graphql`)
    GraphQl,
}

impl Dialect {
    /// File extension for generated output, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::TypeScript => ".d.ts",
            Dialect::Flow => ".flow.js",
            Dialect::GraphQl => ".graphql",
        }
    }

    /// Keyword that opens a declaration
    pub fn declarator(&self) -> &'static str {
        match self {
            Dialect::TypeScript | Dialect::Flow => "export interface",
            Dialect::GraphQl => "type",
        }
    }

    /// Token for JSON strings
    pub fn string_token(&self) -> &'static str {
        match self {
            Dialect::TypeScript | Dialect::Flow => "string",
            Dialect::GraphQl => "String",
        }
    }

    /// Token for JSON numbers
    pub fn number_token(&self) -> &'static str {
        match self {
            Dialect::TypeScript | Dialect::Flow => "number",
            Dialect::GraphQl => "Number",
        }
    }

    /// Token for JSON booleans
    pub fn boolean_token(&self) -> &'static str {
        match self {
            Dialect::TypeScript | Dialect::Flow => "boolean",
            Dialect::GraphQl => "Boolean",
        }
    }

    /// Array-of-element token: `T[]` for TypeScript/Flow, `[T]` for GraphQL
    pub fn array_of(&self, element: &str) -> String {
        match self {
            Dialect::TypeScript | Dialect::Flow => format!("{element}[]"),
            Dialect::GraphQl => format!("[{element}]"),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::TypeScript => write!(f, "typescript"),
            Dialect::Flow => write!(f, "flow"),
            Dialect::GraphQl => write!(f, "graphql"),
        }
    }
}

/// Type annotation for one field of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A single token: a scalar token, a hoisted declaration name, or an
    /// already-resolved array form of either
    Ident(String),
    /// JSON null, emitted as the literal token `null` in every dialect
    Null,
    /// An array that did not resolve to a single element token; rendered
    /// literally with its annotated elements (empty arrays render `[]`)
    List(Vec<TypeExpr>),
}

impl TypeExpr {
    /// Create an identifier expression
    pub fn ident(token: impl Into<String>) -> Self {
        TypeExpr::Ident(token.into())
    }

    /// Render this expression as declaration text
    pub fn render(&self) -> String {
        match self {
            TypeExpr::Ident(token) => token.clone(),
            TypeExpr::Null => "null".to_string(),
            TypeExpr::List(elements) => {
                let inner = elements
                    .iter()
                    .map(TypeExpr::render)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{inner}]")
            }
        }
    }
}

/// One field of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, taken verbatim from the JSON key
    pub name: String,
    /// Field type annotation
    pub ty: TypeExpr,
}

impl Field {
    /// Create a new field
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One named declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Emitted declaration name (prefix already applied)
    pub name: String,
    /// Fields in sample insertion order
    pub fields: Vec<Field>,
}

/// The full set of declarations inferred from one sample, in emission order
/// (root first, then first-registration order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarations {
    pub(crate) declarations: Vec<Declaration>,
    pub(crate) dialect: Dialect,
}

impl Declarations {
    /// The dialect these declarations render in
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// File extension the rendered output should be written with
    pub fn extension(&self) -> &'static str {
        self.dialect.extension()
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether there are no declarations
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate declarations in emission order
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    /// Look up a declaration by its emitted name
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }
}
