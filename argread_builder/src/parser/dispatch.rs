use std::env;

use crate::api::Reader;
use crate::error::{join_tokens, Error};
use crate::parser::token::Token;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

impl<'a> Reader<'a> {
    /// Run the reader against the input tokens.
    ///
    /// Reading happens in three phases:
    /// 1. Flags and named values are dispatched (and removed) in the order they appear.
    /// A named value takes the token immediately after it as its operand, whatever that token looks like.
    /// 2. The positional slots are bound, in declaration order, to the first remaining tokens.
    /// 3. The variadic receives all the tokens left over, or if there isn't one, the optional slots are bound in declaration order.
    ///
    /// Reading stops at the first error.
    /// Handlers invoked before the error are not rolled back.
    ///
    /// The reader may be re-used; only the handlers' targets are affected by processing.
    pub fn process(&mut self, tokens: &[impl AsRef<str>]) -> Result<(), Error> {
        let mut remaining: Vec<String> = tokens
            .iter()
            .map(|token| token.as_ref().to_string())
            .collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Processing tokens: {remaining:?}.");
        }

        self.consume_switches(&mut remaining)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Remaining after switches: {remaining:?}.");
        }

        self.consume_positionals(&mut remaining)?;
        self.consume_trailing(remaining)
    }

    /// Run the reader against the Cli [`env::args`], skipping the program name.
    pub fn process_args(&mut self) -> Result<(), Error> {
        let tokens: Vec<String> = env::args().skip(1).collect();
        self.process(tokens.as_slice())
    }

    fn consume_switches(&mut self, remaining: &mut Vec<String>) -> Result<(), Error> {
        let mut index = 0;

        while index < remaining.len() {
            // Re-evaluate at the same index after each removal.
            match Token::classify(&remaining[index]) {
                Token::ShortGroup(_) => {
                    let token = remaining.remove(index);
                    self.consume_short_group(index, &token, remaining)?;
                }
                Token::Long(_) => {
                    let token = remaining.remove(index);
                    self.consume_long(index, &token, remaining)?;
                }
                Token::Plain => index += 1,
            }
        }

        Ok(())
    }

    fn consume_short_group(
        &mut self,
        index: usize,
        token: &str,
        remaining: &mut Vec<String>,
    ) -> Result<(), Error> {
        let names: Vec<char> = token.chars().skip(1).collect();

        for (name_index, name) in names.iter().copied().enumerate() {
            let locate = |error: Error| {
                error
                    .with("argument", token)
                    .with("argument index", index)
                    .with("name", name)
                    .with("name index", name_index)
            };

            if let Some(&slot) = self.short_flags.get(&name) {
                let handler = &mut self.flags[slot];
                handler().map_err(|cause| {
                    locate(Error::new("error setting flag")).caused_by(cause)
                })?;
            } else if let Some(&slot) = self.short_named.get(&name) {
                if name_index + 1 != names.len() {
                    return Err(locate(Error::new(
                        "may not have a short named value anywhere but the end of a flag group",
                    )));
                }

                if index >= remaining.len() {
                    return Err(locate(Error::new(
                        "no value found for short named value at end of arguments",
                    )));
                }

                let operand = remaining.remove(index);
                let handler = &mut self.named[slot];
                handler(operand.as_str()).map_err(|cause| {
                    locate(Error::new("error setting named argument")).caused_by(cause)
                })?;
            } else {
                return Err(locate(Error::new("unknown short name found in arguments")));
            }
        }

        Ok(())
    }

    fn consume_long(
        &mut self,
        index: usize,
        token: &str,
        remaining: &mut Vec<String>,
    ) -> Result<(), Error> {
        let name = &token[2..];
        let locate = |error: Error| error.with("argument", token).with("argument index", index);

        if let Some(&slot) = self.long_flags.get(name) {
            let handler = &mut self.flags[slot];
            handler().map_err(|cause| locate(Error::new("error setting flag")).caused_by(cause))
        } else if let Some(&slot) = self.long_named.get(name) {
            if index >= remaining.len() {
                return Err(locate(Error::new(
                    "no value found for long named value at end of arguments",
                )));
            }

            let operand = remaining.remove(index);
            let handler = &mut self.named[slot];
            handler(operand.as_str()).map_err(|cause| {
                locate(Error::new("error setting named argument")).caused_by(cause)
            })
        } else {
            Err(locate(Error::new("unknown long name found in arguments")))
        }
    }

    fn consume_positionals(&mut self, remaining: &mut Vec<String>) -> Result<(), Error> {
        let needed = self.positional.len();

        if needed == 0 {
            return Ok(());
        }

        if remaining.len() < needed {
            return Err(Error::new("not enough positional arguments")
                .with("needed", needed)
                .with("gotten", remaining.len())
                .with("arguments", join_tokens(remaining.as_slice())));
        }

        for (slot, argument) in remaining.drain(..needed).enumerate() {
            let handler = &mut self.positional[slot];
            handler(argument.as_str()).map_err(|cause| {
                Error::new("error setting positional argument")
                    .with("argument", &argument)
                    .with("argument index", slot + 1)
                    .caused_by(cause)
            })?;
        }

        Ok(())
    }

    fn consume_trailing(&mut self, remaining: Vec<String>) -> Result<(), Error> {
        if remaining.is_empty() {
            return Ok(());
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Trailing tokens: {remaining:?}.");
        }

        if let Some(handler) = self.variadic.as_mut() {
            return handler(remaining.as_slice()).map_err(|cause| {
                Error::new("error setting variant argument")
                    .with("arguments", join_tokens(remaining.as_slice()))
                    .caused_by(cause)
            });
        }

        let maximum = self.optional.len();

        if remaining.len() > maximum {
            return Err(Error::new("too many optional arguments")
                .with("maximum", maximum)
                .with("gotten", remaining.len())
                .with("arguments", join_tokens(remaining.as_slice())));
        }

        let offset = self.positional.len();

        for (slot, argument) in remaining.iter().enumerate() {
            let handler = &mut self.optional[slot];
            handler(argument.as_str()).map_err(|cause| {
                Error::new("error setting optional argument")
                    .with("argument index", offset + slot)
                    .with("arguments", join_tokens(remaining.as_slice()))
                    .caused_by(cause)
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rand::{thread_rng, Rng};
    use rstest::rstest;
    use std::cell::Cell;

    #[test]
    fn empty_reader_empty_input() {
        let tokens: &[&str] = &[];
        Reader::new().process(tokens).unwrap();
    }

    #[test]
    fn empty_reader_positional_input() {
        let error = Reader::new().process(&["cat"]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "too many optional arguments {arguments: cat, gotten: 1, maximum: 0}"
        );
    }

    #[test]
    fn flag_group() {
        let mut apple = false;
        let mut verbose = false;
        Reader::new()
            .flag(&mut apple, true, Some('a'), Some("apple"))
            .flag(&mut verbose, true, Some('v'), Some("verbose"))
            .process(&["-av"])
            .unwrap();
        assert!(apple);
        assert!(verbose);
    }

    #[rstest]
    #[case(vec!["-a"], 1, 0)]
    #[case(vec!["--apple"], 1, 0)]
    #[case(vec!["-aa"], 2, 0)]
    #[case(vec!["-ab", "--apple"], 2, 1)]
    #[case(vec!["x", "-ba", "y", "--banana"], 1, 2)]
    #[case(vec!["-bab"], 1, 2)]
    fn flag_counts(#[case] tokens: Vec<&str>, #[case] apples: u32, #[case] bananas: u32) {
        let apple = Cell::new(0);
        let banana = Cell::new(0);
        let mut rest: Vec<String> = Vec::default();
        Reader::new()
            .flag_func(
                || {
                    apple.set(apple.get() + 1);
                    Ok(())
                },
                Some('a'),
                Some("apple"),
            )
            .flag_func(
                || {
                    banana.set(banana.get() + 1);
                    Ok(())
                },
                Some('b'),
                Some("banana"),
            )
            .var(&mut rest)
            .process(tokens.as_slice())
            .unwrap();
        assert_eq!(apple.get(), apples);
        assert_eq!(banana.get(), bananas);
    }

    #[test]
    fn flag_repeats_random() {
        for _ in 0..100 {
            let repeats: usize = thread_rng().gen_range(1..20);
            let count = Cell::new(0);
            let group = format!("-{}", "q".repeat(repeats));
            Reader::new()
                .flag_func(
                    || {
                        count.set(count.get() + 1);
                        Ok(())
                    },
                    Some('q'),
                    None,
                )
                .process(&[group])
                .unwrap();
            assert_eq!(count.get(), repeats);
        }
    }

    #[test]
    fn flag_error() {
        let error = Reader::new()
            .flag_func(|| Err(Error::new("disk full")), Some('a'), Some("apple"))
            .process(&["x", "-a"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "error setting flag {argument: -a, argument index: 1, name: a, name index: 0}: disk full"
        );

        let error = Reader::new()
            .flag_func(|| Err(Error::new("disk full")), Some('a'), Some("apple"))
            .process(&["--apple"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "error setting flag {argument: --apple, argument index: 0}: disk full"
        );
    }

    #[rstest]
    #[case(vec!["-b", "--dog"], "--dog")]
    #[case(vec!["--banana", "-a"], "-a")]
    #[case(vec!["-b", "-"], "-")]
    #[case(vec!["-b", "b1", "--banana", "b2"], "b2")]
    #[case(vec!["-ab", "b1"], "b1")]
    fn named_operand(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        let mut banana = String::default();
        let mut apple = false;
        Reader::new()
            .named(&mut banana, Some('b'), Some("banana"))
            .flag(&mut apple, true, Some('a'), None)
            .process(tokens.as_slice())
            .unwrap();
        assert_eq!(banana, expected);
    }

    #[test]
    fn named_operand_not_positional() {
        let mut input = String::default();
        let mut first = String::default();
        Reader::new()
            .named(&mut input, Some('i'), Some("input"))
            .pos(&mut first)
            .process(&["--input", "cat", "dog"])
            .unwrap();
        assert_eq!(input, "cat");
        assert_eq!(first, "dog");
    }

    #[test]
    fn named_not_at_end() {
        let mut apple = false;
        let mut banana = false;
        let error = Reader::new()
            .named(&mut apple, Some('a'), Some("apple"))
            .flag(&mut banana, true, Some('b'), Some("banana"))
            .process(&["-ab", "true", "dog"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "may not have a short named value anywhere but the end of a flag group {argument: -ab, argument index: 0, name: a, name index: 0}"
        );
    }

    #[test]
    fn named_short_at_end_of_input() {
        let mut banana = String::default();
        let error = Reader::new()
            .named(&mut banana, Some('b'), Some("banana"))
            .process(&["cat", "-b"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "no value found for short named value at end of arguments {argument: -b, argument index: 1, name: b, name index: 0}"
        );
    }

    #[test]
    fn named_long_at_end_of_input() {
        let mut banana = String::default();
        let error = Reader::new()
            .named(&mut banana, Some('b'), Some("banana"))
            .process(&["--banana"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "no value found for long named value at end of arguments {argument: --banana, argument index: 0}"
        );
    }

    #[test]
    fn named_error() {
        let mut number: u8 = 0;
        let error = Reader::new()
            .named(&mut number, Some('n'), Some("number"))
            .process(&["-n", "x"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "error setting named argument {argument: -n, argument index: 0, name: n, name index: 0}: unable to parse value {input: x, type: uint8}: invalid digit found in string"
        );

        let error = Reader::new()
            .named(&mut number, Some('n'), Some("number"))
            .process(&["--number", "300"])
            .unwrap_err();
        assert_contains!(
            error.to_string(),
            "error setting named argument {argument: --number, argument index: 0}: unable to parse value {input: 300, type: uint8}"
        );
    }

    #[test]
    fn unknown_short() {
        let mut apple = false;
        let error = Reader::new()
            .flag(&mut apple, true, Some('a'), None)
            .process(&["-ac"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown short name found in arguments {argument: -ac, argument index: 0, name: c, name index: 1}"
        );
        // Flags before the unknown name have already fired.
        assert!(apple);
    }

    #[test]
    fn unknown_long() {
        let error = Reader::new().process(&["--cat"]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown long name found in arguments {argument: --cat, argument index: 0}"
        );
    }

    #[rstest]
    #[case("-24", -24.0)]
    #[case("-6.45", -6.45)]
    #[case("-0", 0.0)]
    fn negative_number_positional(#[case] token: &str, #[case] expected: f64) {
        let mut value: f64 = 1.0;
        Reader::new().pos(&mut value).process(&[token]).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn double_dash_positional() {
        let mut value = String::default();
        Reader::new().pos(&mut value).process(&["--"]).unwrap();
        assert_eq!(value, "--");
    }

    #[test]
    fn positional_not_enough() {
        let mut first = String::default();
        let mut second = String::default();
        let error = Reader::new()
            .pos(&mut first)
            .pos(&mut second)
            .process(&["cat"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "not enough positional arguments {arguments: cat, gotten: 1, needed: 2}"
        );
    }

    #[test]
    fn positional_empty_input() {
        let mut first = String::default();
        let tokens: &[&str] = &[];
        let error = Reader::new().pos(&mut first).process(tokens).unwrap_err();
        assert_eq!(error.message(), "not enough positional arguments");
        assert_eq!(error.context("needed"), Some("1"));
        assert_eq!(error.context("gotten"), Some("0"));
    }

    #[test]
    fn positional_error() {
        let mut first = String::default();
        let mut second = String::default();
        let mut third: isize = 0;
        let error = Reader::new()
            .pos(&mut first)
            .pos(&mut second)
            .pos(&mut third)
            .process(&["cat", "dog", "mouse"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "error setting positional argument {argument: mouse, argument index: 3}: unable to parse value {input: mouse, type: int}: invalid digit found in string"
        );
        assert_eq!(first, "cat");
        assert_eq!(second, "dog");
    }

    #[test]
    fn mixed() {
        let mut first = String::default();
        let mut input = String::default();
        let mut verbose = false;
        let mut optionals = [String::default(), String::default(), String::default()];
        let [o1, o2, o3] = &mut optionals;
        Reader::new()
            .pos(&mut first)
            .named(&mut input, Some('i'), Some("input"))
            .flag(&mut verbose, true, Some('v'), Some("verbose"))
            .optional(o1)
            .optional(o2)
            .optional(o3)
            .process(&["-v", "cat", "--input", "keyboard", "dog", "pig"])
            .unwrap();
        assert!(verbose);
        assert_eq!(input, "keyboard");
        assert_eq!(first, "cat");
        assert_eq!(optionals, ["dog", "pig", ""]);
    }

    #[rstest]
    #[case(vec![], None, None)]
    #[case(vec!["1"], Some(1), None)]
    #[case(vec!["1", "2"], Some(1), Some(2))]
    fn optional_partial(
        #[case] tokens: Vec<&str>,
        #[case] expected_a: Option<u32>,
        #[case] expected_b: Option<u32>,
    ) {
        let mut a: u32 = u32::MAX;
        let mut b: u32 = u32::MAX;
        Reader::new()
            .optional(&mut a)
            .optional(&mut b)
            .process(tokens.as_slice())
            .unwrap();
        assert_eq!(a, expected_a.unwrap_or(u32::MAX));
        assert_eq!(b, expected_b.unwrap_or(u32::MAX));
    }

    #[test]
    fn optional_too_many() {
        let mut first = String::default();
        let mut a = String::default();
        let error = Reader::new()
            .pos(&mut first)
            .optional(&mut a)
            .process(&["x", "y", "z"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "too many optional arguments {arguments: y z, gotten: 2, maximum: 1}"
        );
    }

    #[test]
    fn optional_error() {
        let mut first = String::default();
        let mut a: u8 = 0;
        let mut b: u8 = 0;
        let error = Reader::new()
            .pos(&mut first)
            .optional(&mut a)
            .optional(&mut b)
            .process(&["x", "1", "y"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "error setting optional argument {argument index: 2, arguments: 1 y}: unable to parse value {input: y, type: uint8}: invalid digit found in string"
        );
        assert_eq!(a, 1);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["1"], vec![1])]
    #[case(vec!["1", "-5", "42"], vec![1, -5, 42])]
    #[case(vec!["0x10", "-0b11"], vec![16, -3])]
    fn variadic(#[case] tokens: Vec<&str>, #[case] expected: Vec<i32>) {
        let mut values: Vec<i32> = Vec::default();
        Reader::new()
            .var(&mut values)
            .process(tokens.as_slice())
            .unwrap();
        assert_eq!(values, expected);
    }

    #[test]
    fn variadic_any_count() {
        for _ in 0..50 {
            let count: usize = thread_rng().gen_range(0..40);
            let tokens: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            let mut first: usize = 0;
            let mut values: Vec<usize> = Vec::default();
            let result = Reader::new()
                .pos(&mut first)
                .var(&mut values)
                .process(tokens.as_slice());

            if count == 0 {
                assert_matches!(result, Err(_));
            } else {
                result.unwrap();
                assert_eq!(first, 0);
                assert_eq!(values, (1..count).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn variadic_error() {
        let mut values: Vec<i32> = Vec::default();
        let error = Reader::new()
            .var(&mut values)
            .process(&["1", "two", "3"])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "error setting variant argument {arguments: 1 two 3}: unable to parse value {input: two, type: int32}: invalid digit found in string"
        );
    }

    #[test]
    fn reusable() {
        let seen = Cell::new(0);
        let mut reader = Reader::new()
            .flag_func(
                || {
                    seen.set(seen.get() + 1);
                    Ok(())
                },
                Some('v'),
                None,
            )
            .pos_func(|_| Ok(()));
        reader.process(&["-v", "a"]).unwrap();
        reader.process(&["b", "-vv"]).unwrap();
        reader.process(&["c", "d"]).unwrap_err();
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn switches_only_phase_equivalence() {
        // Without switches, phases 2 & 3 see the tokens untouched.
        let tokens = ["a", "b", "c"];
        let mut with_switches = (String::default(), Vec::<String>::default());
        let mut without = (String::default(), Vec::<String>::default());
        let mut unused = false;
        Reader::new()
            .flag(&mut unused, true, Some('z'), Some("zebra"))
            .pos(&mut with_switches.0)
            .var(&mut with_switches.1)
            .process(&tokens)
            .unwrap();
        Reader::new()
            .pos(&mut without.0)
            .var(&mut without.1)
            .process(&tokens)
            .unwrap();
        assert_eq!(with_switches, without);
        assert!(!unused);
    }
}
