//! Derive macros for the todo-sync architecture
//!
//! This crate provides procedural macros to reduce boilerplate when
//! defining action enums for the reducer pattern.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (intents/outcomes)
//!
//! # Example
//!
//! ```ignore
//! use todo_sync_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[intent]
//!     FetchTodos,
//!
//!     #[outcome]
//!     TodosFetched { todos: Vec<TodoRecord> },
//! }
//!
//! // Generated methods:
//! assert!(TodoAction::FetchTodos.is_intent());
//! assert!(TodoAction::TodosFetched { todos: vec![] }.is_outcome());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_intent()` - Returns true if this variant is a user intent
/// - `is_outcome()` - Returns true if this variant is an operation outcome
/// - `outcome_type()` - Returns the outcome type name for logging
///
/// # Attributes
///
/// - `#[intent]` - Mark a variant as a user intent (starts an operation)
/// - `#[outcome]` - Mark a variant as an operation outcome (fulfilled or
///   rejected completion delivered by an effect)
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[intent]` and `#[outcome]` attributes
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoAction {
///     #[intent]
///     DeleteTodo { id: TodoId },
///
///     #[outcome]
///     TodoDeleted { id: TodoId },
///
///     #[outcome]
///     DeleteFailed { error: String },
/// }
///
/// let action = TodoAction::DeleteTodo { id: TodoId::new(1) };
/// assert!(action.is_intent());
/// assert!(!action.is_outcome());
/// ```
#[proc_macro_derive(Action, attributes(intent, outcome))]
#[allow(clippy::expect_used)] // Proc macro panics become compile errors, not runtime panics
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Collect variants marked as intents or outcomes
    let mut intent_variants = Vec::new();
    let mut outcome_variants = Vec::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let is_intent = has_attribute(&variant.attrs, "intent");
        let is_outcome = has_attribute(&variant.attrs, "outcome");

        if is_intent && is_outcome {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[intent] and #[outcome]",
            )
            .to_compile_error()
            .into();
        }

        if is_intent {
            intent_variants.push(variant_name);
        }

        if is_outcome {
            outcome_variants.push(variant_name);
        }
    }

    // Map of variant names to their field shapes for pattern generation
    let variant_map: std::collections::HashMap<_, _> = data_enum
        .variants
        .iter()
        .map(|v| (&v.ident, &v.fields))
        .collect();

    // Generate is_intent() match arms
    let is_intent_arms = intent_variants.iter().map(|variant| {
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => true, },
            Fields::Unit => quote! { Self::#variant => true, },
        }
    });

    // Generate is_outcome() match arms
    let is_outcome_arms = outcome_variants.iter().map(|variant| {
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => true, },
            Fields::Unit => quote! { Self::#variant => true, },
        }
    });

    // Generate outcome_type() match arms for outcomes only
    let outcome_type_arms = outcome_variants.iter().map(|variant| {
        let type_name = variant.to_string();
        let fields = variant_map.get(variant).expect("variant must exist in map");
        match fields {
            Fields::Named(_) => quote! { Self::#variant { .. } => #type_name, },
            Fields::Unnamed(_) => quote! { Self::#variant(..) => #type_name, },
            Fields::Unit => quote! { Self::#variant => #type_name, },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a user intent
            #[must_use]
            pub const fn is_intent(&self) -> bool {
                match self {
                    #(#is_intent_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is an operation outcome
            #[must_use]
            pub const fn is_outcome(&self) -> bool {
                match self {
                    #(#is_outcome_arms)*
                    _ => false,
                }
            }

            /// Returns the outcome type name for logging
            ///
            /// Only outcomes have type names. Intents return "unknown".
            #[must_use]
            pub const fn outcome_type(&self) -> &'static str {
                match self {
                    #(#outcome_type_arms)*
                    _ => "unknown",
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
