//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// Submits a `SolverPlugin` to `inventory`, so the solver is picked up by
/// `RegistryBuilder::register_all_plugins` without an explicit registration call.
///
/// # Attributes
///
/// - `year`: Required. The calendar year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["ranges"])
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Solver` trait. If the
/// trait is not implemented the expansion fails with an unsatisfied
/// `MustImplementSolver` bound pointing at the type.
///
/// # Example
///
/// ```ignore
/// use puzzle_solver::PuzzleSolver;
///
/// #[derive(PuzzleSolver)]
/// #[puzzle(year = 2023, day = 5, tags = ["ranges"])]
/// struct Day5Solver;
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "PuzzleSolver derive macro requires a #[puzzle(year = .., day = ..)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new(lit.span(), "day must be between 1 and 25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(|input| input.parse::<LitStr>(), syn::Token![,])?;
            tags.extend(list.iter().map(LitStr::value));
        } else {
            return Err(meta.error("unsupported key, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                id: ::puzzle_solver::PuzzleId::new(#year, #day),
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
