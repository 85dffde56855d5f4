//! Built-in default stylesheet of the typography plugin.
//!
//! Values follow the published `@tailwindcss/typography` defaults for the
//! elements configurations usually touch. Colors are expressed through the
//! plugin's `--tw-prose-*` custom properties so that color themes keep
//! working after overrides.

use once_cell::sync::Lazy;

use super::directive::Declarations;
use super::overrides::DEFAULT_VARIANT;
use super::stylesheet::Stylesheet;

static TYPOGRAPHY: Lazy<Stylesheet> = Lazy::new(build_typography);

/// Returns the default typography stylesheet.
///
/// The stylesheet is built on first use and shared afterwards.
pub fn typography_preset() -> &'static Stylesheet {
    &TYPOGRAPHY
}

fn decls(pairs: &[(&str, &str)]) -> Declarations {
    pairs.iter().copied().collect()
}

fn build_typography() -> Stylesheet {
    let d = DEFAULT_VARIANT;
    let headings = "var(--tw-prose-headings)";

    Stylesheet::new()
        .rule(d, "p", decls(&[("margin-top", "1.25em"), ("margin-bottom", "1.25em")]))
        .rule(
            d,
            "a",
            decls(&[
                ("color", "var(--tw-prose-links)"),
                ("text-decoration", "underline"),
                ("font-weight", "500"),
            ]),
        )
        .rule(
            d,
            "strong",
            decls(&[("color", "var(--tw-prose-bold)"), ("font-weight", "600")]),
        )
        .rule(d, "a strong", decls(&[("color", "inherit")]))
        .rule(d, "blockquote strong", decls(&[("color", "inherit")]))
        .rule(d, "thead th strong", decls(&[("color", "inherit")]))
        .rule(
            d,
            "ol",
            decls(&[
                ("list-style-type", "decimal"),
                ("margin-top", "1.25em"),
                ("margin-bottom", "1.25em"),
                ("padding-inline-start", "1.625em"),
            ]),
        )
        .rule(
            d,
            "ul",
            decls(&[
                ("list-style-type", "disc"),
                ("margin-top", "1.25em"),
                ("margin-bottom", "1.25em"),
                ("padding-inline-start", "1.625em"),
            ]),
        )
        .rule(
            d,
            "ol > li::marker",
            decls(&[("font-weight", "400"), ("color", "var(--tw-prose-counters)")]),
        )
        .rule(d, "ul > li::marker", decls(&[("color", "var(--tw-prose-bullets)")]))
        .rule(
            d,
            "hr",
            decls(&[
                ("border-color", "var(--tw-prose-hr)"),
                ("border-top-width", "1px"),
                ("margin-top", "3em"),
                ("margin-bottom", "3em"),
            ]),
        )
        .rule(
            d,
            "blockquote",
            decls(&[
                ("font-weight", "500"),
                ("font-style", "italic"),
                ("color", "var(--tw-prose-quotes)"),
                ("border-inline-start-width", "0.25rem"),
                ("border-inline-start-color", "var(--tw-prose-quote-borders)"),
                ("margin-top", "1.6em"),
                ("margin-bottom", "1.6em"),
                ("padding-inline-start", "1em"),
            ]),
        )
        .rule(
            d,
            "h1",
            decls(&[
                ("color", headings),
                ("font-weight", "800"),
                ("font-size", "2.25em"),
                ("margin-top", "0"),
                ("margin-bottom", "0.8888889em"),
                ("line-height", "1.1111111"),
            ]),
        )
        .rule(
            d,
            "h2",
            decls(&[
                ("color", headings),
                ("font-weight", "700"),
                ("font-size", "1.5em"),
                ("margin-top", "2em"),
                ("margin-bottom", "1em"),
                ("line-height", "1.3333333"),
            ]),
        )
        .rule(
            d,
            "h3",
            decls(&[
                ("color", headings),
                ("font-weight", "600"),
                ("font-size", "1.25em"),
                ("margin-top", "1.6em"),
                ("margin-bottom", "0.6em"),
                ("line-height", "1.6"),
            ]),
        )
        .rule(
            d,
            "h4",
            decls(&[
                ("color", headings),
                ("font-weight", "600"),
                ("margin-top", "1.5em"),
                ("margin-bottom", "0.5em"),
                ("line-height", "1.5"),
            ]),
        )
        .rule(d, "img", decls(&[("margin-top", "2em"), ("margin-bottom", "2em")]))
        .rule(d, "figure", decls(&[("margin-top", "2em"), ("margin-bottom", "2em")]))
        .rule(d, "figure > *", decls(&[("margin-top", "0"), ("margin-bottom", "0")]))
        .rule(
            d,
            "figcaption",
            decls(&[
                ("color", "var(--tw-prose-captions)"),
                ("font-size", "0.875em"),
                ("line-height", "1.4285714"),
                ("margin-top", "0.8571429em"),
            ]),
        )
        .rule(
            d,
            "code",
            decls(&[
                ("color", "var(--tw-prose-code)"),
                ("font-weight", "600"),
                ("font-size", "0.875em"),
            ]),
        )
        .rule(d, "code::before", decls(&[("content", "\"`\"")]))
        .rule(d, "code::after", decls(&[("content", "\"`\"")]))
        .rule(d, "a code", decls(&[("color", "inherit")]))
        .rule(
            d,
            "pre",
            decls(&[
                ("color", "var(--tw-prose-pre-code)"),
                ("background-color", "var(--tw-prose-pre-bg)"),
                ("overflow-x", "auto"),
                ("font-weight", "400"),
                ("font-size", "0.875em"),
                ("line-height", "1.7142857"),
                ("margin-top", "1.7142857em"),
                ("margin-bottom", "1.7142857em"),
                ("border-radius", "0.375rem"),
                ("padding-top", "0.8571429em"),
                ("padding-inline-end", "1.1428571em"),
                ("padding-bottom", "0.8571429em"),
                ("padding-inline-start", "1.1428571em"),
            ]),
        )
        .rule(
            d,
            "pre code",
            decls(&[
                ("background-color", "transparent"),
                ("border-width", "0"),
                ("border-radius", "0"),
                ("padding", "0"),
                ("font-weight", "inherit"),
                ("color", "inherit"),
                ("font-size", "inherit"),
                ("font-family", "inherit"),
                ("line-height", "inherit"),
            ]),
        )
        .rule(d, "pre code::before", decls(&[("content", "none")]))
        .rule(d, "pre code::after", decls(&[("content", "none")]))
        .rule(
            d,
            "table",
            decls(&[
                ("width", "100%"),
                ("table-layout", "auto"),
                ("margin-top", "2em"),
                ("margin-bottom", "2em"),
                ("font-size", "0.875em"),
                ("line-height", "1.7142857"),
            ]),
        )
        .rule(
            d,
            "thead",
            decls(&[
                ("border-bottom-width", "1px"),
                ("border-bottom-color", "var(--tw-prose-th-borders)"),
            ]),
        )
        .rule(
            d,
            "thead th",
            decls(&[
                ("color", headings),
                ("font-weight", "600"),
                ("vertical-align", "bottom"),
            ]),
        )
        .rule(
            d,
            "tbody tr",
            decls(&[
                ("border-bottom-width", "1px"),
                ("border-bottom-color", "var(--tw-prose-td-borders)"),
            ]),
        )
        // Size modifier, patched on top of DEFAULT by the plugin.
        .rule("lg", "p", decls(&[("margin-top", "1.3333333em"), ("margin-bottom", "1.3333333em")]))
        .rule("lg", "h1", decls(&[("font-size", "2.6666667em"), ("margin-top", "0")]))
        .rule("lg", "img", decls(&[("margin-top", "1.7777778em"), ("margin-bottom", "1.7777778em")]))
        .rule("lg", "figure", decls(&[("margin-top", "1.7777778em"), ("margin-bottom", "1.7777778em")]))
        .rule("lg", "code", decls(&[("font-size", "0.8888889em")]))
        .rule("lg", "pre", decls(&[("font-size", "0.8888889em"), ("border-radius", "0.375rem")]))
}
