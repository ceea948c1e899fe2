//! Method signatures
//!
//! Bytecode-style descriptors `(<params>)<ret>` are parsed and re-rendered in
//! canonical form, so `(Ljava.lang.String; I)V` and `(Ljava/lang/String;I)V`
//! name the same signature. Anything that does not parse (source-language
//! signatures without a descriptor grammar) is kept as trimmed opaque text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

/// One field/return type in a bytecode descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// Class type, unsigiled internal name (`java/lang/String`)
    Class(String),
    Array(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Option<Self> {
        let c = chars.next()?;
        let ty = match c {
            'V' => Self::Void,
            'Z' => Self::Boolean,
            'B' => Self::Byte,
            'C' => Self::Char,
            'S' => Self::Short,
            'I' => Self::Int,
            'J' => Self::Long,
            'F' => Self::Float,
            'D' => Self::Double,
            'L' => {
                let mut name = String::new();
                loop {
                    match chars.next()? {
                        ';' => break,
                        '.' => name.push('/'),
                        other => name.push(other),
                    }
                }
                if name.is_empty() {
                    return None;
                }
                Self::Class(name)
            }
            '[' => {
                let elem = Self::parse(chars)?;
                if elem == Self::Void {
                    return None;
                }
                Self::Array(Box::new(elem))
            }
            _ => return None,
        };
        Some(ty)
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Void => out.push('V'),
            Self::Boolean => out.push('Z'),
            Self::Byte => out.push('B'),
            Self::Char => out.push('C'),
            Self::Short => out.push('S'),
            Self::Int => out.push('I'),
            Self::Long => out.push('J'),
            Self::Float => out.push('F'),
            Self::Double => out.push('D'),
            Self::Class(name) => {
                out.push('L');
                out.push_str(name);
                out.push(';');
            }
            Self::Array(elem) => {
                out.push('[');
                elem.write_to(out);
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Structured {
    params: Vec<TypeDescriptor>,
    ret: TypeDescriptor,
}

/// Canonical method signature
///
/// Equality and hashing use the canonical text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MethodSignature {
    canonical: Arc<str>,
    #[serde(skip)]
    structured: Option<Arc<Structured>>,
}

impl MethodSignature {
    /// Parse a signature, falling back to opaque text
    pub fn parse(text: &str) -> Self {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        match Self::parse_descriptor(&compact) {
            Some(structured) => {
                let mut canonical = String::with_capacity(compact.len());
                canonical.push('(');
                for p in &structured.params {
                    p.write_to(&mut canonical);
                }
                canonical.push(')');
                structured.ret.write_to(&mut canonical);
                Self {
                    canonical: canonical.into(),
                    structured: Some(Arc::new(structured)),
                }
            }
            None => Self {
                canonical: text.trim().into(),
                structured: None,
            },
        }
    }

    fn parse_descriptor(compact: &str) -> Option<Structured> {
        let mut chars = compact.chars().peekable();
        if chars.next()? != '(' {
            return None;
        }
        let mut params = Vec::new();
        while *chars.peek()? != ')' {
            let p = TypeDescriptor::parse(&mut chars)?;
            if p == TypeDescriptor::Void {
                return None;
            }
            params.push(p);
        }
        chars.next();
        let ret = TypeDescriptor::parse(&mut chars)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Structured { params, ret })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Whether the text parsed as a bytecode descriptor
    pub fn is_structured(&self) -> bool {
        self.structured.is_some()
    }

    pub fn params(&self) -> Option<&[TypeDescriptor]> {
        self.structured.as_ref().map(|s| s.params.as_slice())
    }

    pub fn return_type(&self) -> Option<&TypeDescriptor> {
        self.structured.as_ref().map(|s| &s.ret)
    }
}

impl PartialEq for MethodSignature {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for MethodSignature {}

impl Hash for MethodSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl From<String> for MethodSignature {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<MethodSignature> for String {
    fn from(s: MethodSignature) -> Self {
        s.canonical.to_string()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
