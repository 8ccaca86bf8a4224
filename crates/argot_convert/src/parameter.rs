//! Parameter descriptors.

use argot_foundation::{Result, Type, Value};

use crate::annotation::{Annotation, Plan};

/// How a parameter consumes tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParameterKind {
    /// One token.
    #[default]
    Positional,
    /// Every remaining token, one value each.
    Variadic,
    /// The rest of the input as a single token.
    ConsumeRest,
}

/// A command parameter: name, annotation, default, and kind.
///
/// The annotation is compiled when the parameter is created, so an invalid
/// annotation is reported at registration rather than at invocation.
#[derive(Clone, Debug)]
pub struct Parameter {
    name: String,
    annotation: Annotation,
    plan: Plan,
    declared: bool,
    default: Option<Value>,
    kind: ParameterKind,
}

impl Parameter {
    /// Creates a required positional parameter.
    ///
    /// # Errors
    ///
    /// Returns an invalid annotation error if the annotation does not
    /// compile.
    pub fn new(name: impl Into<String>, annotation: impl Into<Annotation>) -> Result<Self> {
        let annotation = annotation.into();
        let plan = Plan::compile(&annotation)?;
        Ok(Self {
            name: name.into(),
            annotation,
            plan,
            declared: true,
            default: None,
            kind: ParameterKind::Positional,
        })
    }

    /// Creates a parameter without an annotation.
    ///
    /// It converts as `str` until a default is set, after which it converts
    /// as the default's type.
    #[must_use]
    pub fn undeclared(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: Annotation::Plain(Type::Str),
            plan: Plan::for_type(Type::Str),
            declared: false,
            default: None,
            kind: ParameterKind::Positional,
        }
    }

    /// Sets the default, making the parameter optional.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        let default = default.into();
        if !self.declared {
            let ty = match default.value_type() {
                Type::Absent => Type::Str,
                ty => ty,
            };
            self.annotation = Annotation::Plain(ty);
            self.plan = Plan::for_type(ty);
        }
        self.default = Some(default);
        self
    }

    /// Makes the parameter variadic.
    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.kind = ParameterKind::Variadic;
        self
    }

    /// Makes the parameter consume the rest of the input.
    #[must_use]
    pub fn consume_rest(mut self) -> Self {
        self.kind = ParameterKind::ConsumeRest;
        self
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The annotation as declared (or inferred).
    #[must_use]
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// The compiled annotation.
    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// The default, if any.
    #[must_use]
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The default, or the absent value.
    #[must_use]
    pub fn default_or_none(&self) -> Value {
        self.default.clone().unwrap_or(Value::None)
    }

    /// How the parameter consumes tokens.
    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Returns true for variadic parameters.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.kind == ParameterKind::Variadic
    }

    /// Returns true if the parameter has no default and is not variadic.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.is_variadic()
    }
}
