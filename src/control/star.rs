//! Star - Kleisli arrows `a -> M b` over a chosen inner Monad.
//!
//! A [`StarFamily`] is built from the type representative of an inner Monad
//! `M`. The representative is checked once, when the family is built; a value
//! that is not a Monad never yields a family. Every [`Star`] of the family
//! wraps a function returning an `M`, and each composed computation checks at
//! runtime that the functions it runs really return an `M`.
//!
//! Stars over different inner Monads are different nominal types
//! (`Star( Identity )` vs `Star( Maybe )`), so composing them fails the
//! same-type guard.
//!
//! # Examples
//!
//! ```rust
//! use algebox::control::StarFamily;
//! use algebox::typeclass::{Function, Functor, Identity, Semigroupoid, Value};
//!
//! let family = StarFamily::new(&Identity::type_rep()).unwrap();
//!
//! let parse = family.construct(Function::lift(|text: String| {
//!     Identity::new(text.len() as i64)
//! }));
//! let double = family.construct(Function::lift(|n: i64| Identity::new(n * 2)));
//!
//! let pipeline = parse.compose(&Value::from(double)).unwrap();
//! let result = pipeline.run_with("four").unwrap();
//! assert_eq!(result.to_string(), "Identity 8");
//!
//! let shown = pipeline.map(&Function::lift(|n: i64| n.to_string())).unwrap();
//! assert_eq!(shown.run_with("abc").unwrap().to_string(), r#"Identity "6""#);
//! ```

use std::any::Any;
use std::fmt;

use super::pair::Pair;
use crate::typeclass::{
    Capabilities, Capability, Category, Function, Functor, Instance, Profunctor, Semigroupoid,
    Strong, TypeDescriptor, TypeError, TypeRep, TypeTag, Value, inspect, is_monad,
    is_same_type, require_instance, require_same_type,
};

const COMPUTATIONS: &str = "Computations must return a type of";
const COMPUTATION: &str = "Computation must return a type of";

/// The family of Stars over one inner Monad.
#[derive(Debug, Clone)]
pub struct StarFamily {
    monad: Value,
    inner_tag: TypeTag,
    tag: TypeTag,
}

impl StarFamily {
    /// Builds the family of Stars over the Monad `monad` represents.
    ///
    /// # Errors
    ///
    /// Returns a construction error unless `monad` is the type representative
    /// of a Monad (declaring `map`, `chain` and `of`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebox::control::StarFamily;
    /// use algebox::typeclass::{Identity, Value};
    ///
    /// let family = StarFamily::new(&Identity::type_rep()).unwrap();
    /// assert_eq!(family.tag().name(), "Star( Identity )");
    ///
    /// // An instance is not a type representative.
    /// assert!(StarFamily::new(&Value::from(Identity::new(1))).is_err());
    /// ```
    pub fn new(monad: &Value) -> Result<Self, TypeError> {
        if !(matches!(monad, Value::Type(_)) && is_monad(monad)) {
            tracing::debug!(found = monad.type_tag().name(), "star requires a monad");
            return Err(TypeError::construction(
                "Star",
                "Monad required for construction",
            ));
        }
        let inner_tag = monad.type_tag();
        let tag = TypeTag::parameterized(&Star::DESCRIPTOR, &inner_tag);
        tracing::trace!(star = tag.qualified(), "star family constructed");

        Ok(Self {
            monad: monad.clone(),
            inner_tag,
            tag,
        })
    }

    /// The nominal type tag of the family, e.g. `Star( Identity )`.
    pub const fn tag(&self) -> &TypeTag {
        &self.tag
    }

    /// The tag of the inner Monad.
    pub const fn inner_tag(&self) -> &TypeTag {
        &self.inner_tag
    }

    /// The type representative of the family.
    pub fn type_rep(&self) -> Value {
        Value::type_rep(self.clone())
    }

    /// Wraps a function of the form `a -> M b`.
    pub fn construct(&self, run_with: Function) -> Star {
        Star {
            family: self.clone(),
            computation: run_with,
        }
    }

    /// Wraps a callable value of the form `a -> M b`.
    ///
    /// # Errors
    ///
    /// Returns an argument-shape error if `value` is not callable.
    pub fn from_value(&self, value: &Value) -> Result<Star, TypeError> {
        Function::from_value(self.tag.name(), value)
            .map(|function| self.construct(function))
            .map_err(|_| {
                TypeError::argument_shape(
                    self.tag.name(),
                    "Function in the form (a -> m b) required",
                )
            })
    }

    /// The identity Star, lifting its input with the inner Monad's `of`.
    pub fn id(&self) -> Star {
        let monad = self.monad.clone();
        self.construct(Function::fallible(move |input| monad.of(input)))
    }

    fn operation(&self, method: &str) -> String {
        format!("{}.{method}", self.tag.name())
    }

    fn require_inner(&self, method: &str, value: &Value, expected: &str) -> Result<(), TypeError> {
        require_same_type(
            &self.operation(method),
            &self.inner_tag,
            value,
            &format!("{expected} {}", self.inner_tag.name()),
        )
    }
}

impl TypeRep for StarFamily {
    fn type_tag(&self) -> TypeTag {
        self.tag.clone()
    }

    fn capabilities(&self) -> Capabilities {
        Star::DESCRIPTOR.capabilities
    }

    fn construct(&self, arguments: Vec<Value>) -> Result<Value, TypeError> {
        let run_with = arguments.into_iter().next().unwrap_or_default();
        self.from_value(&run_with).map(Value::from)
    }
}

/// A computation `a -> M b` over the inner Monad of its family.
#[derive(Debug, Clone)]
pub struct Star {
    family: StarFamily,
    computation: Function,
}

impl Star {
    /// The Star family descriptor.
    pub const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(
        "Star",
        Some(2),
        Capabilities::new(&[
            Capability::Compose,
            Capability::Contramap,
            Capability::Id,
            Capability::Map,
            Capability::Promap,
        ]),
    );

    /// The family this Star belongs to.
    pub const fn family(&self) -> &StarFamily {
        &self.family
    }

    /// The nominal type tag, shared with the family.
    pub fn tag(&self) -> TypeTag {
        self.family.tag.clone()
    }

    /// Runs the computation.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the computation, including the runtime
    /// checks of composed Stars.
    pub fn run_with(&self, input: impl Into<Value>) -> Result<Value, TypeError> {
        self.computation.call(input.into())
    }

    fn derive<F>(&self, computation: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TypeError> + 'static,
    {
        self.family.construct(Function::fallible(computation))
    }

    fn require_pair<'a>(&self, method: &str, input: &'a Value) -> Result<&'a Pair, TypeError> {
        require_instance(
            &self.family.operation(method),
            &Pair::tag(),
            input,
            "Pair required for computation input",
        )
    }
}

impl From<Star> for Value {
    fn from(star: Star) -> Self {
        Self::instance(star)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&Instance::inspect(self))
    }
}

impl Functor for Star {
    fn map(&self, function: &Function) -> Result<Self, TypeError> {
        let (star, function) = (self.clone(), function.clone());
        Ok(self.derive(move |input| {
            let result = star.run_with(input)?;
            star.family.require_inner("map", &result, COMPUTATIONS)?;
            result.map(&function)
        }))
    }
}

impl Profunctor for Star {
    fn contramap(&self, function: &Function) -> Self {
        let (computation, function) = (self.computation.clone(), function.clone());
        self.derive(move |input| computation.call(function.call(input)?))
    }

    fn promap(&self, left: &Function, right: &Function) -> Self {
        let (star, left, right) = (self.clone(), left.clone(), right.clone());
        self.derive(move |input| {
            let result = star.run_with(left.call(input)?)?;
            star.family.require_inner("promap", &result, COMPUTATION)?;
            result.map(&right)
        })
    }
}

impl Strong for Star {
    fn first(&self) -> Self {
        let star = self.clone();
        self.derive(move |input| {
            let pair = star.require_pair("first", &input)?;
            let result = star.run_with(pair.fst().clone())?;
            star.family.require_inner("first", &result, COMPUTATION)?;

            let second = pair.snd().clone();
            result.map(&Function::new(move |first| {
                Pair::new(first, second.clone()).into()
            }))
        })
    }

    fn second(&self) -> Self {
        let star = self.clone();
        self.derive(move |input| {
            let pair = star.require_pair("second", &input)?;
            let result = star.run_with(pair.snd().clone())?;
            star.family.require_inner("second", &result, COMPUTATION)?;

            let first = pair.fst().clone();
            result.map(&Function::new(move |second| {
                Pair::new(first.clone(), second).into()
            }))
        })
    }

    fn both(&self) -> Self {
        let star = self.clone();
        self.derive(move |input| {
            let pair = star.require_pair("both", &input)?;
            let left = star.run_with(pair.fst().clone())?;
            let right = star.run_with(pair.snd().clone())?;
            star.family.require_inner("both", &left, COMPUTATION)?;
            star.family.require_inner("both", &right, COMPUTATION)?;

            if left.capabilities().implements(Capability::Ap) {
                let pairing = Function::new(|first| {
                    Function::new(move |second| Pair::new(first.clone(), second).into()).into()
                });
                left.map(&pairing)?.ap(&right)
            } else {
                left.chain(&Function::fallible(move |first| {
                    right.map(&Function::new(move |second| {
                        Pair::new(first.clone(), second).into()
                    }))
                }))
            }
        })
    }
}

impl Semigroupoid for Star {
    fn compose(&self, other: &Value) -> Result<Self, TypeError> {
        let operation = self.family.operation("compose");
        let expected = format!("{} required", self.family.tag.name());
        let other: Self = require_instance::<Self>(&operation, &self.family.tag, other, &expected)?
            .clone();

        let star = self.clone();
        Ok(self.derive(move |input| {
            let result = star.run_with(input)?;
            star.family.require_inner("compose", &result, COMPUTATIONS)?;

            let (family, other, reference) = (star.family.clone(), other.clone(), result.clone());
            result.chain(&Function::fallible(move |value| {
                let inner = other.run_with(value)?;
                if is_same_type(&reference, &inner) {
                    Ok(inner)
                } else {
                    Err(TypeError::nominal_mismatch(
                        family.operation("compose"),
                        format!(
                            "Both computations must return a type of {}",
                            family.inner_tag.name()
                        ),
                    ))
                }
            }))
        }))
    }
}

impl Category for Star {
    fn id(&self) -> Self {
        self.family.id()
    }
}

impl Instance for Star {
    fn type_tag(&self) -> TypeTag {
        self.tag()
    }

    fn capabilities(&self) -> Capabilities {
        Self::DESCRIPTOR.capabilities
    }

    fn inspect(&self) -> String {
        format!(
            "{}{}",
            self.family.tag.name(),
            inspect(&Value::from(self.computation.clone()))
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn map_erased(&self, function: &Function) -> Result<Value, TypeError> {
        self.map(function).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{ErrorKind, Identity, Setoid};
    use rstest::rstest;

    fn family() -> StarFamily {
        StarFamily::new(&Identity::type_rep()).unwrap()
    }

    fn increment() -> Star {
        family().construct(Function::lift(|n: i64| Identity::new(n + 1)))
    }

    fn escaping() -> Star {
        family().construct(Function::lift(|n: i64| n))
    }

    fn identity_of(value: impl Into<Value>) -> Value {
        Identity::new(value).into()
    }

    // =========================================================================
    // Family construction
    // =========================================================================

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::from(Identity::new(1)))]
    #[case(Pair::type_rep())]
    #[case(Value::from(Function::identity()))]
    fn family_requires_monad(#[case] monad: Value) {
        let error = StarFamily::new(&monad).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Construction);
        assert_eq!(error.to_string(), "Star: Monad required for construction");
    }

    #[rstest]
    fn family_tag_embeds_inner_monad() {
        let family = family();
        assert_eq!(family.tag().name(), "Star( Identity )");
        assert_eq!(family.tag().qualified(), "algebox/Star@2( algebox/Identity )");
        assert_eq!(family.inner_tag(), &Identity::tag());
    }

    #[rstest]
    fn from_value_requires_callable() {
        let error = family().from_value(&Value::from(3)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Star( Identity ): Function in the form (a -> m b) required"
        );
    }

    #[rstest]
    fn type_rep_constructs_from_function() {
        let function = Value::from(Function::lift(|n: i64| Identity::new(n)));
        let star = family().type_rep().call(vec![function]).unwrap();
        assert_eq!(star.to_string(), "Star( Identity ) Function");
    }

    // =========================================================================
    // Functor and Profunctor
    // =========================================================================

    #[rstest]
    fn map_transforms_result() {
        let star = increment().map(&Function::lift(|n: i64| n * 10)).unwrap();
        assert_eq!(star.run_with(1).unwrap(), identity_of(20));
    }

    #[rstest]
    fn map_checks_computation_result() {
        let star = escaping().map(&Function::identity()).unwrap();
        let error = star.run_with(1).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NominalMismatch);
        assert_eq!(
            error.to_string(),
            "Star( Identity ).map: Computations must return a type of Identity"
        );
    }

    #[rstest]
    fn contramap_adapts_input() {
        let star = increment().contramap(&Function::lift(|text: String| text.len() as i64));
        assert_eq!(star.run_with("abc").unwrap(), identity_of(4));
    }

    #[rstest]
    fn promap_adapts_both_ends() {
        let star = increment().promap(
            &Function::lift(|n: i64| n * 2),
            &Function::lift(|n: i64| n.to_string()),
        );
        assert_eq!(star.run_with(5).unwrap(), identity_of("11"));
    }

    #[rstest]
    fn promap_checks_computation_result() {
        let star = escaping().promap(&Function::identity(), &Function::identity());
        assert_eq!(
            star.run_with(1).unwrap_err().to_string(),
            "Star( Identity ).promap: Computation must return a type of Identity"
        );
    }

    // =========================================================================
    // Category
    // =========================================================================

    #[rstest]
    fn compose_runs_left_to_right() {
        let double = family().construct(Function::lift(|n: i64| Identity::new(n * 2)));
        let composed = increment().compose(&Value::from(double)).unwrap();
        assert_eq!(composed.run_with(3).unwrap(), identity_of(8));
    }

    #[rstest]
    #[case(Value::from(Identity::new(1)))]
    #[case(Value::from(crate::control::tuple1(1)))]
    #[case(Value::from(Function::identity()))]
    fn compose_requires_star_of_same_monad(#[case] other: Value) {
        let error = increment().compose(&other).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NominalMismatch);
        assert_eq!(
            error.to_string(),
            "Star( Identity ).compose: Star( Identity ) required"
        );
    }

    #[rstest]
    fn compose_checks_first_computation() {
        let composed = escaping().compose(&Value::from(increment())).unwrap();
        assert_eq!(
            composed.run_with(1).unwrap_err().to_string(),
            "Star( Identity ).compose: Computations must return a type of Identity"
        );
    }

    #[rstest]
    fn compose_checks_second_computation() {
        let composed = increment().compose(&Value::from(escaping())).unwrap();
        assert_eq!(
            composed.run_with(1).unwrap_err().to_string(),
            "Star( Identity ).compose: Both computations must return a type of Identity"
        );
    }

    #[rstest]
    #[case(0)]
    #[case(41)]
    fn identity_is_neutral_for_compose(#[case] input: i64) {
        let star = increment();
        let left = star.compose(&Value::from(star.id())).unwrap();
        let right = star.id().compose(&Value::from(star.clone())).unwrap();
        let expected = star.run_with(input).unwrap();

        assert_eq!(left.run_with(input).unwrap(), expected);
        assert_eq!(right.run_with(input).unwrap(), expected);
    }

    // =========================================================================
    // Strong
    // =========================================================================

    #[rstest]
    fn first_runs_on_first_slot() {
        let result = increment().first().run_with(Pair::new(1, "kept")).unwrap();
        let expected = identity_of(Pair::new(2, "kept"));
        assert!(result.equals(&expected));
    }

    #[rstest]
    fn second_runs_on_second_slot() {
        let result = increment().second().run_with(Pair::new("kept", 1)).unwrap();
        let expected = identity_of(Pair::new("kept", 2));
        assert!(result.equals(&expected));
    }

    #[rstest]
    fn both_runs_on_each_slot() {
        let result = increment().both().run_with(Pair::new(1, 10)).unwrap();
        let identity = result.downcast_ref::<Identity>().unwrap();
        assert!(identity.equals(&identity_of(Pair::new(2, 11))));
    }

    #[rstest]
    #[case("first")]
    #[case("second")]
    #[case("both")]
    fn strong_operations_require_pair_input(#[case] method: &str) {
        let star = match method {
            "first" => increment().first(),
            "second" => increment().second(),
            _ => increment().both(),
        };
        let error = star.run_with(1).unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("Star( Identity ).{method}: Pair required for computation input")
        );
    }

    #[rstest]
    fn first_checks_computation_result() {
        let error = escaping().first().run_with(Pair::new(1, 2)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Star( Identity ).first: Computation must return a type of Identity"
        );
    }

    #[rstest]
    fn inspect_names_inner_monad() {
        assert_eq!(increment().to_string(), "Star( Identity ) Function");
    }
}
