//! Regex-based CSS and JS minification.
//!
//! Pure text transforms: comments are stripped, whitespace runs collapse
//! to a single space, and spacing around punctuation is removed. There is
//! no tokenizer, so comment-like sequences inside string or regex
//! literals are transformed too - a documented limitation of this tool,
//! not a bug to fix silently.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)//.*$").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Punctuation tighteners applied after whitespace collapse.
static CSS_PUNCT: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\s*\{\s*").unwrap(), "{"),
        (Regex::new(r"\s*\}\s*").unwrap(), "}"),
        (Regex::new(r"\s*:\s*").unwrap(), ":"),
        (Regex::new(r"\s*;\s*").unwrap(), ";"),
    ]
});

static JS_PUNCT: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\s*\{\s*").unwrap(), "{"),
        (Regex::new(r"\s*\}\s*").unwrap(), "}"),
        (Regex::new(r"\s*\(\s*").unwrap(), "("),
        (Regex::new(r"\s*\)\s*").unwrap(), ")"),
        (Regex::new(r"\s*\.\s*").unwrap(), "."),
        (Regex::new(r"\s*,\s*").unwrap(), ","),
        (Regex::new(r"\s*;\s*").unwrap(), ";"),
    ]
});

/// Minify CSS source text.
///
/// Strips `/* ... */` comments, collapses whitespace, removes spacing
/// around `{` `}` `:` `;` and drops a `;` directly before `}`.
pub fn minify_css(source: &str) -> String {
    let stripped = BLOCK_COMMENT.replace_all(source, "");
    let mut out = WHITESPACE.replace_all(&stripped, " ").into_owned();
    for (re, repl) in CSS_PUNCT.iter() {
        out = re.replace_all(&out, *repl).into_owned();
    }
    out.replace(";}", "}").trim().to_string()
}

/// Minify JavaScript source text.
///
/// Strips `// ...` line comments and `/* ... */` block comments, collapses
/// whitespace and removes spacing around `{` `}` `(` `)` `.` `,` `;`.
/// Unlike CSS, a `;` directly before `}` is kept.
pub fn minify_js(source: &str) -> String {
    let stripped = LINE_COMMENT.replace_all(source, "");
    let stripped = BLOCK_COMMENT.replace_all(&stripped, "");
    let mut out = WHITESPACE.replace_all(&stripped, " ").into_owned();
    for (re, repl) in JS_PUNCT.iter() {
        out = re.replace_all(&out, *repl).into_owned();
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_fixture() {
        assert_eq!(minify_css("/* c */ a { color: red; }"), "a{color:red}");
    }

    #[test]
    fn test_js_fixture() {
        assert_eq!(
            minify_js("// hi\nfunction f ( ) { return 1 ; }"),
            "function f(){return 1;}"
        );
    }

    #[test]
    fn test_css_empty_input() {
        assert_eq!(minify_css(""), "");
    }

    #[test]
    fn test_css_strips_multiline_comments() {
        let out = minify_css("a{}/* one */\nb{}/* two\nspans lines */c{}");
        assert!(!out.contains("/*"));
        assert!(!out.contains("*/"));
        assert_eq!(out, "a{}b{}c{}");
    }

    #[test]
    fn test_css_no_whitespace_around_punctuation() {
        let out = minify_css(".nav li { margin : 0 ; padding : 0 4px ; }\n\n.menu {\n  color : blue ;\n}");
        for punct in ['{', '}', ':', ';'] {
            assert!(!out.contains(&format!(" {punct}")), "space before {punct} in {out}");
            assert!(!out.contains(&format!("{punct} ")), "space after {punct} in {out}");
        }
        assert_eq!(out, ".nav li{margin:0;padding:0 4px}.menu{color:blue}");
    }

    #[test]
    fn test_css_idempotent() {
        let once = minify_css("/* c */ h1 , h2 { font-weight : bold ; margin : 0 ; }");
        assert_eq!(minify_css(&once), once);
    }

    #[test]
    fn test_js_line_and_block_comments() {
        let out = minify_js("// lead\nlet a = 1; /* block */ let b = 2;");
        assert!(!out.contains("//"));
        assert!(!out.contains("/*"));
        assert_eq!(out, "let a = 1;let b = 2;");
    }

    #[test]
    fn test_js_keeps_semicolon_before_brace() {
        assert_eq!(minify_js("f ( ) { g ( ) ; }"), "f(){g();}");
    }

    #[test]
    fn test_js_tightens_dots_and_commas() {
        assert_eq!(
            minify_js("api . get ( url , opts ) ;"),
            "api.get(url,opts);"
        );
    }

    #[test]
    fn test_js_idempotent() {
        let once = minify_js("// c\nconst list = [ 1 , 2 ] . map ( f ) ;");
        assert_eq!(minify_js(&once), once);
    }

    #[test]
    fn test_js_empty_input() {
        assert_eq!(minify_js(""), "");
    }
}
