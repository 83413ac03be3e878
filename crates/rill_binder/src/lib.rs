//! rill_binder: name and type resolution.
//!
//! Binding runs in two stages. [`Binder::bind_global_scope`] resolves one
//! submission's declarations and top-level statements against the chain of
//! earlier submissions. [`Binder::bind_program`] then binds and lowers the
//! function bodies and produces an executable [`rill_bound::BoundProgram`].

mod binder;
mod scope;

pub use binder::Binder;
pub use scope::BoundScope;
