/// Name of the enclosing function, e.g. `"free_function"` or `"member_function"`.
///
/// Closure frames are skipped, so inside `thread::spawn(|| ...)` in `main` it
/// still yields `"main"`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        $crate::short_function_name(::std::any::type_name_of_val(&f))
    }};
}

/// Reduces the type name of a nested `fn f` to its enclosing function's name.
#[doc(hidden)]
pub fn short_function_name(full: &'static str) -> &'static str {
    let mut name = full.strip_suffix("::f").unwrap_or(full);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}
