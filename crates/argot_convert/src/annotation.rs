//! Parameter annotations and their compiled form.
//!
//! An [`Annotation`] is what a command author declares. At registration
//! time it is compiled into a [`Plan`], which is what the dispatcher walks:
//!
//! - `Optional[T]` becomes `Union[T, Absent]`
//! - nested unions are flattened and duplicate members dropped
//! - entity types are replaced by their registered converter
//! - parameterized forms collapse to their origin type
//! - `Greedy[T]` is validated

use std::fmt;

use argot_foundation::{Error, Result, Type, Value};

use crate::converter::ConverterSpec;
use crate::registry::Registry;

/// A declared parameter annotation.
#[derive(Clone, Debug)]
pub enum Annotation {
    /// A plain type.
    Plain(Type),
    /// An explicit converter.
    Converter(ConverterSpec),
    /// The absent marker, only meaningful inside a union.
    Absent,
    /// `T` or absent.
    Optional(Box<Annotation>),
    /// The first member that converts wins.
    Union(Vec<Annotation>),
    /// One of a fixed set of values.
    Literal(Vec<Value>),
    /// A generic form such as `list[int]`; converts as its origin.
    Parameterized {
        /// The base type.
        origin: Type,
        /// Type arguments, not used for conversion.
        args: Vec<Annotation>,
    },
    /// Consume as many tokens as convert.
    Greedy(Box<Annotation>),
}

impl Annotation {
    /// `Optional[inner]`.
    #[must_use]
    pub fn optional(inner: impl Into<Annotation>) -> Self {
        Self::Optional(Box::new(inner.into()))
    }

    /// `Union[members..]`.
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Annotation>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// `Literal[values..]`.
    #[must_use]
    pub fn literal(values: impl IntoIterator<Item = Value>) -> Self {
        Self::Literal(values.into_iter().collect())
    }

    /// `Greedy[inner]`.
    #[must_use]
    pub fn greedy(inner: impl Into<Annotation>) -> Self {
        Self::Greedy(Box::new(inner.into()))
    }

    /// `origin[args..]`.
    #[must_use]
    pub fn parameterized(origin: Type, args: impl IntoIterator<Item = Annotation>) -> Self {
        Self::Parameterized {
            origin,
            args: args.into_iter().collect(),
        }
    }
}

impl From<Type> for Annotation {
    fn from(ty: Type) -> Self {
        Self::Plain(ty)
    }
}

impl From<ConverterSpec> for Annotation {
    fn from(spec: ConverterSpec) -> Self {
        Self::Converter(spec)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(ty) => write!(f, "{ty}"),
            Self::Converter(spec) => write!(f, "{}", spec.name()),
            Self::Absent => write!(f, "{}", Type::Absent),
            Self::Optional(inner) => write!(f, "Optional[{inner}]"),
            Self::Union(members) => write!(f, "Union[{}]", join(members)),
            Self::Literal(values) => {
                let reprs: Vec<String> = values.iter().map(Value::repr).collect();
                write!(f, "Literal[{}]", reprs.join(", "))
            }
            Self::Parameterized { origin, args } => write!(f, "{origin}[{}]", join(args)),
            Self::Greedy(inner) => write!(f, "Greedy[{inner}]"),
        }
    }
}

/// A compiled annotation.
#[derive(Clone, Debug)]
pub enum Plan {
    /// The absent marker.
    Absent,
    /// Boolean words.
    Bool,
    /// A built-in constructor (`int`, `float`, `str`, ...).
    Construct(Type),
    /// A converter, either declared or registered for an entity type.
    Convert {
        /// Name reported in aggregate failures.
        label: String,
        /// The converter.
        spec: ConverterSpec,
    },
    /// Members tried in order.
    Union(Vec<Plan>),
    /// Literal values, in declaration order.
    Literal(Vec<Value>),
    /// Repeated conversion of the element plan.
    Greedy(Box<Plan>),
}

impl Plan {
    /// Compiles an annotation.
    ///
    /// # Errors
    ///
    /// Returns an invalid annotation error for an empty union or literal,
    /// a literal of a non-primitive value, a `Greedy` that is not the
    /// outermost form, or a `Greedy` over `str`, the absent marker, another
    /// `Greedy`, or a union that admits absence.
    pub fn compile(annotation: &Annotation) -> Result<Self> {
        compile(annotation, true)
    }

    /// The plan for a plain type.
    #[must_use]
    pub fn for_type(ty: Type) -> Self {
        match ty {
            Type::Absent => Self::Absent,
            Type::Bool => Self::Bool,
            ty if ty.is_entity() => match Registry::get(ty) {
                Some(spec) => Self::Convert {
                    label: ty.name().to_string(),
                    spec,
                },
                None => Self::Construct(ty),
            },
            ty => Self::Construct(ty),
        }
    }

    /// Name reported in aggregate failures.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Absent => Type::Absent.name().to_string(),
            Self::Bool => Type::Bool.name().to_string(),
            Self::Construct(ty) => ty.name().to_string(),
            Self::Convert { label, .. } => label.clone(),
            Self::Union(arms) => {
                let labels: Vec<String> = arms.iter().map(Plan::label).collect();
                format!("Union[{}]", labels.join(", "))
            }
            Self::Literal(values) => {
                let reprs: Vec<String> = values.iter().map(Value::repr).collect();
                format!("Literal[{}]", reprs.join(", "))
            }
            Self::Greedy(inner) => format!("Greedy[{}]", inner.label()),
        }
    }

    /// Returns true if the plan can yield the absent value without a token.
    #[must_use]
    pub fn accepts_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Union(arms) => arms.iter().any(|arm| matches!(arm, Self::Absent)),
            _ => false,
        }
    }

    fn same_member(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) | (Self::Bool, Self::Bool) => true,
            (Self::Construct(a), Self::Construct(b)) => a == b,
            _ => false,
        }
    }
}

fn compile(annotation: &Annotation, outermost: bool) -> Result<Plan> {
    match annotation {
        Annotation::Plain(ty) => Ok(Plan::for_type(*ty)),
        Annotation::Converter(spec) => Ok(Plan::Convert {
            label: spec.name().to_string(),
            spec: spec.clone(),
        }),
        Annotation::Absent => Ok(Plan::Absent),
        Annotation::Optional(inner) => {
            compile_union([inner.as_ref(), &Annotation::Absent], annotation)
        }
        Annotation::Union(members) => compile_union(members.iter(), annotation),
        Annotation::Literal(values) => compile_literal(values, annotation),
        Annotation::Parameterized { origin, .. } => Ok(Plan::for_type(*origin)),
        Annotation::Greedy(inner) => {
            if !outermost {
                return Err(Error::invalid_annotation(format!(
                    "{annotation} must be the outermost annotation."
                )));
            }
            if matches!(inner.as_ref(), Annotation::Greedy(_)) {
                return Err(Error::invalid_annotation(format!("{annotation} is invalid.")));
            }
            let element = compile(inner, false)?;
            let invalid = matches!(element, Plan::Construct(Type::Str) | Plan::Absent)
                || element.accepts_absent();
            if invalid {
                return Err(Error::invalid_annotation(format!("{annotation} is invalid.")));
            }
            Ok(Plan::Greedy(Box::new(element)))
        }
    }
}

fn compile_union<'a>(
    members: impl IntoIterator<Item = &'a Annotation>,
    annotation: &Annotation,
) -> Result<Plan> {
    let mut arms: Vec<Plan> = Vec::new();
    for member in members {
        let compiled = compile(member, false)?;
        let flattened = match compiled {
            Plan::Union(inner) => inner,
            other => vec![other],
        };
        for arm in flattened {
            if !arms.iter().any(|existing| existing.same_member(&arm)) {
                arms.push(arm);
            }
        }
    }
    match arms.len() {
        0 => Err(Error::invalid_annotation(format!("{annotation} has no members."))),
        1 => Ok(arms.remove(0)),
        _ => Ok(Plan::Union(arms)),
    }
}

fn compile_literal(values: &[Value], annotation: &Annotation) -> Result<Plan> {
    if values.is_empty() {
        return Err(Error::invalid_annotation(format!("{annotation} has no values.")));
    }
    let primitive = |v: &Value| {
        matches!(
            v,
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
        )
    };
    if let Some(bad) = values.iter().find(|v| !primitive(v)) {
        return Err(Error::invalid_annotation(format!(
            "{annotation} contains {}, which is not a primitive value.",
            bad.repr()
        )));
    }
    Ok(Plan::Literal(values.to_vec()))
}
