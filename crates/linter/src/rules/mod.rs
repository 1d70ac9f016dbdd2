//! TypeScript lint rules
//!
//! Rules ported from typescript-eslint

pub mod adjacent_overload_signatures;
pub mod dot_notation;
pub mod no_confusing_non_null_assertion;
pub mod no_duplicate_enum_values;
pub mod no_empty_interface;
pub mod no_inferrable_types;
pub mod no_meaningless_void_operator;
pub mod no_misused_object_likes;
pub mod prefer_await;
pub mod prefer_enum_initializers;
pub mod require_array_sort_compare;
pub mod unbound_method;
pub mod use_unknown_in_catch_callback_variable;

pub use adjacent_overload_signatures::AdjacentOverloadSignatures;
pub use dot_notation::{DotNotation, DotNotationConfig};
pub use no_confusing_non_null_assertion::NoConfusingNonNullAssertion;
pub use no_duplicate_enum_values::NoDuplicateEnumValues;
pub use no_empty_interface::{NoEmptyInterface, NoEmptyInterfaceConfig};
pub use no_inferrable_types::{NoInferrableTypes, NoInferrableTypesConfig};
pub use no_meaningless_void_operator::NoMeaninglessVoidOperator;
pub use no_misused_object_likes::NoMisusedObjectLikes;
pub use prefer_await::PreferAwait;
pub use prefer_enum_initializers::PreferEnumInitializers;
pub use require_array_sort_compare::{RequireArraySortCompare, RequireArraySortCompareConfig};
pub use unbound_method::UnboundMethod;
pub use use_unknown_in_catch_callback_variable::UseUnknownInCatchCallbackVariable;
