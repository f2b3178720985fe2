//! Command-line tokenizer.
//!
//! A single left-to-right boundary scan: a space splits tokens unless the
//! scan is inside quotes, where "inside quotes" is one boolean flipped by
//! every `"` or `'`. Quotes are not matched pairwise and an unterminated
//! quote swallows the rest of the line into one token. Each token has its
//! leading whitespace trimmed, every quote character removed, and `\N`
//! replaced with a newline.

/// Split a command line into tokens.
///
/// Always returns at least one token; empty input yields a single empty
/// token. Consecutive spaces produce empty tokens between them.
pub fn tokenize(line: &str) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let mut tokens = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        if ch == '"' || ch == '\'' {
            in_quotes = !in_quotes;
        }

        if ch == ' ' && !in_quotes {
            tokens.push(clean(&line[start..i]));
            // The boundary space stays at the front of the next span and is
            // trimmed away with it.
            start = i;
        }

        if i + ch.len_utf8() == line.len() {
            tokens.push(clean(&line[start..]));
        }
    }

    tokens
}

fn clean(span: &str) -> String {
    span.trim_start()
        .chars()
        .filter(|&c| c != '"' && c != '\'')
        .collect::<String>()
        .replace("\\N", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces() {
        assert_eq!(tokenize("draw_fps true"), vec!["draw_fps", "true"]);
    }

    #[test]
    fn double_quoted_span_is_one_token() {
        assert_eq!(
            tokenize(r#"print "hello world" red"#),
            vec!["print", "hello world", "red"]
        );
    }

    #[test]
    fn single_quoted_span_is_one_token() {
        assert_eq!(
            tokenize("print 'hello world'"),
            vec!["print", "hello world"]
        );
    }

    #[test]
    fn escape_decodes_to_newline_inside_quotes() {
        assert_eq!(
            tokenize(r#"print "first\Nsecond""#),
            vec!["print", "first\nsecond"]
        );
    }

    #[test]
    fn escape_decodes_outside_quotes() {
        assert_eq!(tokenize(r"print a\Nb"), vec!["print", "a\nb"]);
    }

    #[test]
    fn lowercase_escape_is_literal() {
        assert_eq!(tokenize(r"print a\nb"), vec!["print", r"a\nb"]);
    }

    #[test]
    fn empty_input_is_one_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn single_word() {
        assert_eq!(tokenize("commands"), vec!["commands"]);
    }

    #[test]
    fn unterminated_quote_consumes_rest_of_line() {
        assert_eq!(
            tokenize(r#"print "never closed red"#),
            vec!["print", "never closed red"]
        );
    }

    #[test]
    fn mixed_quote_kinds_toggle_the_same_flag() {
        // The `'` closes the span the `"` opened.
        assert_eq!(tokenize(r#"say "a b' c"#), vec!["say", "a b", "c"]);
    }

    #[test]
    fn quotes_inside_a_word_are_removed() {
        assert_eq!(tokenize("print don't"), vec!["print", "dont"]);
    }

    #[test]
    fn double_space_yields_empty_token() {
        assert_eq!(tokenize("print  hi"), vec!["print", "", "hi"]);
    }

    #[test]
    fn trailing_space_yields_trailing_empty_token() {
        assert_eq!(tokenize("print "), vec!["print", ""]);
    }

    #[test]
    fn leading_tab_is_trimmed_from_token() {
        assert_eq!(tokenize("print \thi"), vec!["print", "hi"]);
    }

    #[test]
    fn unicode_tokens() {
        assert_eq!(tokenize("print héllo wörld"), vec!["print", "héllo", "wörld"]);
    }

    #[test]
    fn empty_quotes_give_empty_token() {
        assert_eq!(tokenize(r#"print """#), vec!["print", ""]);
    }

    mod props {
        use proptest::prelude::*;

        use super::super::tokenize;

        proptest! {
            #[test]
            fn never_returns_empty_vec(line in ".{0,40}") {
                prop_assert!(!tokenize(&line).is_empty());
            }

            #[test]
            fn tokens_never_contain_quotes(line in "[a-z \"']{0,40}") {
                for t in tokenize(&line) {
                    prop_assert!(!t.contains('"') && !t.contains('\''));
                }
            }

            #[test]
            fn unquoted_words_split_like_split_on_space(
                words in proptest::collection::vec("[a-z0-9_]{1,8}", 1..6),
            ) {
                let line = words.join(" ");
                prop_assert_eq!(tokenize(&line), words);
            }
        }
    }
}
