//! basicbench Macros
//!
//! Procedural macro for inline instrumentation of functions.
//!
//! ## Macros
//!
//! - `#[basicbenchmark]` - time every call of a function (one run per call)
//! - `#[basicbenchmark(n_runs = 10, pre_run = true)]` - same, with options

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, Pat, parse_macro_input};

// ============================================================================
// Attribute Parsing Helpers
// ============================================================================

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Parse an integer literal attribute: `attr = 42`
    pub fn int(meta: &ParseNestedMeta) -> syn::Result<u64> {
        let value: syn::LitInt = meta.value()?.parse()?;
        value.base10_parse()
    }

    /// Parse a boolean literal attribute: `attr = true`
    pub fn bool(meta: &ParseNestedMeta) -> syn::Result<bool> {
        let value: syn::LitBool = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Time each call of the annotated function and print its summary.
///
/// The function still returns its own value; the statistics are only printed.
/// Parameters must be plain identifiers of `Clone` types, because every timed
/// run receives a fresh clone of the arguments.
///
/// # Example
///
/// ```ignore
/// // Bare: one timed run per call
/// #[basicbenchmark]
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// // Parameterized
/// #[basicbenchmark(n_runs = 10, pre_run = true)]
/// fn parse(input: &str) -> usize {
///     input.split(',').count()
/// }
///
/// // Auto-ranged run count, custom label
/// #[basicbenchmark(autorange = true, name = "hash", min_time = "50ms")]
/// fn hash(data: Vec<u8>) -> u64 { ... }
/// ```
///
/// Options: `n_runs`, `pre_run`, `print_result`, `autorange`, `min_time`, `name`.
#[proc_macro_attribute]
pub fn basicbenchmark(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    basicbenchmark_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn basicbenchmark_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    validate_signature(&func)?;
    let config = parse_config(args)?;

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = func;

    let fn_name_str = sig.ident.to_string();
    let inner_name = format_ident!("__basicbench_{}", sig.ident);
    let name = config.name.unwrap_or(fn_name_str);

    // Inner copy keeps the original parameter patterns (including `mut`)
    let mut inner_sig = sig.clone();
    inner_sig.ident = inner_name.clone();

    let mut outer_sig = sig;
    let mut idents = Vec::new();
    for input in outer_sig.inputs.iter_mut() {
        if let FnArg::Typed(pat_type) = input {
            if let Pat::Ident(pat_ident) = pat_type.pat.as_mut() {
                pat_ident.mutability = None;
                idents.push(pat_ident.ident.clone());
            }
        }
    }

    let n_runs = match (config.autorange, config.n_runs) {
        (true, _) => quote! { .autorange() },
        (false, Some(n)) => quote! { .n_runs(#n) },
        (false, None) => quote! { .n_runs(1u64) },
    };
    let pre_run = config.pre_run;
    let print_result = config.print_result;
    let min_time = config
        .min_time_ns
        .map(|ns| quote! { .min_time(::std::time::Duration::from_nanos(#ns)) })
        .unwrap_or_default();

    Ok(quote! {
        #(#attrs)*
        #vis #outer_sig {
            #[inline(always)]
            #inner_sig #block

            let __basicbench_args = (#(#idents,)*);
            let __basicbench_options = ::basicbench::BenchOptions::new()
                #n_runs
                .pre_run(#pre_run)
                .print_result(#print_result)
                #min_time;

            ::basicbench::benchmark_stats_named(
                #name,
                || {
                    let (#(#idents,)*) = ::core::clone::Clone::clone(&__basicbench_args);
                    #inner_name(#(#idents),*)
                },
                &__basicbench_options,
            )
            .into_return_value()
        }
    })
}

#[derive(Debug)]
struct DecoratorConfig {
    n_runs: Option<u64>,
    autorange: bool,
    pre_run: bool,
    print_result: bool,
    min_time_ns: Option<u64>,
    name: Option<String>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            n_runs: None,
            autorange: false,
            pre_run: false,
            print_result: true,
            min_time_ns: None,
            name: None,
        }
    }
}

fn parse_config(args: TokenStream2) -> Result<DecoratorConfig, syn::Error> {
    let mut config = DecoratorConfig::default();

    // Bare `#[basicbenchmark]`: default configuration
    if args.is_empty() {
        return Ok(config);
    }

    let parser = syn::meta::parser(|meta| {
        let name = attr::name(&meta);
        match name.as_str() {
            "n_runs" => config.n_runs = Some(attr::int(&meta)?),
            "pre_run" => config.pre_run = attr::bool(&meta)?,
            "print_result" => config.print_result = attr::bool(&meta)?,
            "autorange" => config.autorange = attr::bool(&meta)?,
            "name" => config.name = Some(attr::string(&meta)?),
            "min_time" => {
                let value = attr::string(&meta)?;
                config.min_time_ns = Some(
                    parse_duration(&value)
                        .ok_or_else(|| meta.error(format!("invalid duration: {:?}", value)))?,
                );
            }
            _ => return Err(attr::unknown(&meta, &name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;

    Ok(config)
}

fn validate_signature(func: &ItemFn) -> syn::Result<()> {
    if let Some(asyncness) = &func.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "basicbenchmark: async functions are not supported",
        ));
    }
    if let Some(constness) = &func.sig.constness {
        return Err(syn::Error::new_spanned(
            constness,
            "basicbenchmark: const functions are not supported",
        ));
    }
    if let Some(unsafety) = &func.sig.unsafety {
        return Err(syn::Error::new_spanned(
            unsafety,
            "basicbenchmark: unsafe functions are not supported",
        ));
    }
    for input in &func.sig.inputs {
        match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "basicbenchmark: methods taking `self` are not supported",
                ));
            }
            FnArg::Typed(pat_type) => match pat_type.pat.as_ref() {
                Pat::Ident(pat_ident) if pat_ident.by_ref.is_none() && pat_ident.subpat.is_none() => {}
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "basicbenchmark: parameters must be plain identifiers",
                    ));
                }
            },
        }
    }
    Ok(())
}

fn parse_duration(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.starts_with('-') {
        return None;
    }
    if let Some(ms) = s.strip_suffix("ms") {
        ms.trim()
            .parse::<f64>()
            .ok()
            .map(|v| (v * 1_000_000.0) as u64)
    } else if let Some(us) = s.strip_suffix("us").or_else(|| s.strip_suffix("µs")) {
        us.trim().parse::<f64>().ok().map(|v| (v * 1_000.0) as u64)
    } else if let Some(ns) = s.strip_suffix("ns") {
        ns.trim().parse::<f64>().ok().map(|v| v as u64)
    } else if let Some(s_val) = s.strip_suffix('s') {
        s_val
            .trim()
            .parse::<f64>()
            .ok()
            .map(|v| (v * 1_000_000_000.0) as u64)
    } else {
        None
    }
}
