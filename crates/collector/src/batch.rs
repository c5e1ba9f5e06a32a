use std::borrow::Cow;

/// Semantic wire type of a collector parameter.
///
/// The collector protocol tags every value with an XDR-style type code.
/// Progress telemetry only carries double-precision reals today; the enum
/// keeps the tag explicit at the boundary rather than implying it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParamType {
    /// 64-bit IEEE double (XDR `REAL64`).
    Real64,
}

/// A single named, typed parameter inside a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    name: Cow<'static, str>,
    ty: ParamType,
    value: f64,
}

impl Param {
    /// Creates a double-precision parameter.
    #[must_use]
    pub fn real64(name: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::Real64,
            value,
        }
    }

    /// Returns the parameter name as sent on the wire.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the semantic wire type.
    #[must_use]
    pub const fn ty(&self) -> ParamType {
        self.ty
    }

    /// Returns the parameter value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Ordered batch of parameters sent together in one report.
///
/// Order is part of the contract: collectors receive the parameters in
/// exactly the order they were pushed. Batches are built fresh for every
/// send; nothing here is a shared mutable buffer.
///
/// # Examples
///
/// ```
/// use collector::ParamBatch;
///
/// let batch = ParamBatch::new()
///     .real64("moved_bytes", 500_000.0)
///     .real64("percent", 50.0);
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch.params()[0].name(), "moved_bytes");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamBatch {
    params: Vec<Param>,
}

impl ParamBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty batch with room for `capacity` parameters.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            params: Vec::with_capacity(capacity),
        }
    }

    /// Appends a double-precision parameter, returning the batch.
    #[must_use]
    pub fn real64(mut self, name: impl Into<Cow<'static, str>>, value: f64) -> Self {
        self.params.push(Param::real64(name, value));
        self
    }

    /// Appends a parameter in place.
    pub fn push(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Returns the parameters in send order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Returns the value of the first parameter with `name`, when present.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.params
            .iter()
            .find(|param| param.name() == name)
            .map(Param::value)
    }

    /// Returns the number of parameters in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` when the batch carries no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
