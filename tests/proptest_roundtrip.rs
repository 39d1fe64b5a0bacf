//! Property-based round-trip tests for typed messages.
//!
//! Every generated message is serialized, split and dispatched again. The
//! decoded body must equal the one that was serialized.

use proptest::prelude::*;

use irc_message::message::variants::Error as ErrorMessage;
use irc_message::{
    Away, Body, Custom, Invite, Join, Kick, List, MessageKind, Mode, Names, Nick, Notice, Numeric,
    Operator, Part, Password, Ping, Pong, Private, Quit, Registry, Topic, User, Who, Whois, Whowas,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// A middle parameter: non-empty, no spaces, no leading colon.
fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_\\-\\[\\]\\\\^{}|.*!@+]{1,16}").expect("valid regex")
}

fn channel_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[#&][a-zA-Z0-9_\\-]{1,20}").expect("valid regex")
}

/// Free-form text without line breaks or CTCP delimiters.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\\r\\n\\x00\\x01]{0,120}").expect("valid regex")
}

fn optional_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), text_strategy()]
}

fn registration_strategy() -> impl Strategy<Value = Body> {
    prop_oneof![
        token_strategy().prop_map(|p| Body::from(Password::new(p))),
        token_strategy().prop_map(|n| Body::from(Nick::new(n))),
        (token_strategy(), text_strategy()).prop_map(|(u, r)| Body::from(User::new(u, r))),
        (token_strategy(), token_strategy()).prop_map(|(u, p)| Body::from(Operator::new(u, p))),
        optional_text().prop_map(|r| Body::from(Quit::with_reason(r))),
    ]
}

fn channel_op_strategy() -> impl Strategy<Value = Body> {
    prop_oneof![
        (channel_strategy(), optional_text())
            .prop_map(|(c, k)| Body::from(Join::new(c).with_key(k))),
        (channel_strategy(), optional_text())
            .prop_map(|(c, r)| Body::from(Part::new(c).with_reason(r))),
        (channel_strategy(), optional_text())
            .prop_map(|(c, t)| Body::from(Topic::new(c).with_topic(t))),
        prop::option::of(channel_strategy())
            .prop_map(|c| Body::from(Names::new(c.unwrap_or_default()))),
        prop::option::of((channel_strategy(), prop::option::of(token_strategy()))).prop_map(
            |opt| match opt {
                Some((c, s)) => Body::from(List::new(c).with_server(s.unwrap_or_default())),
                None => Body::from(List::default()),
            }
        ),
        (token_strategy(), channel_strategy()).prop_map(|(u, c)| Body::from(Invite::new(u, c))),
        (channel_strategy(), token_strategy(), optional_text())
            .prop_map(|(c, u, r)| Body::from(Kick::new(c, u).with_reason(r))),
    ]
}

fn mode_strategy() -> impl Strategy<Value = Body> {
    (
        token_strategy(),
        prop::option::of((
            token_strategy(),
            prop::option::of((token_strategy(), prop::option::of(token_strategy()))),
        )),
    )
        .prop_map(|(target, rest)| {
            let mut mode = Mode::new(target);
            if let Some((m, rest)) = rest {
                mode = mode.with_mode(m);
                if let Some((arg, mask)) = rest {
                    mode = mode.with_argument(arg).with_mask(mask.unwrap_or_default());
                }
            }
            Body::from(mode)
        })
}

fn send_strategy() -> impl Strategy<Value = Body> {
    let request = prop::string::string_regex("[B-Z][A-Z]{0,10}( [a-z0-9.]{1,10})?")
        .expect("valid regex");
    prop_oneof![
        (token_strategy(), text_strategy()).prop_map(|(t, m)| Body::from(Private::new(t, m))),
        (channel_strategy(), text_strategy()).prop_map(|(t, m)| Body::from(Private::action(t, m))),
        (token_strategy(), request).prop_map(|(t, m)| Body::from(Private::request(t, m))),
        (token_strategy(), text_strategy()).prop_map(|(t, m)| Body::from(Notice::new(t, m))),
        (token_strategy(), text_strategy()).prop_map(|(t, m)| Body::from(Notice::reply(t, m))),
    ]
}

fn misc_strategy() -> impl Strategy<Value = Body> {
    prop_oneof![
        token_strategy().prop_map(|u| Body::from(Who::new(u))),
        token_strategy().prop_map(|u| Body::from(Whois::new(u))),
        token_strategy().prop_map(|u| Body::from(Whowas::new(u))),
        token_strategy().prop_map(|t| Body::from(Ping::new(t))),
        token_strategy().prop_map(|t| Body::from(Pong::new(t))),
        text_strategy().prop_map(|e| Body::from(ErrorMessage::new(e))),
        optional_text().prop_map(|m| Body::from(Away::new(m))),
        (
            0u32..1000,
            prop::collection::vec(token_strategy(), 0..4),
            prop::option::of(text_strategy()),
        )
            .prop_map(|(code, mut params, trailing)| {
                params.extend(trailing);
                Body::from(Numeric::new(code, params))
            }),
        (
            prop::string::string_regex("X[A-Z]{2,8}").expect("valid regex"),
            prop::collection::vec(token_strategy(), 0..4),
        )
            .prop_map(|(cmd, params)| Body::from(Custom::new(cmd, params))),
    ]
}

fn body_strategy() -> impl Strategy<Value = Body> {
    prop_oneof![
        registration_strategy(),
        channel_op_strategy(),
        mode_strategy(),
        send_strategy(),
        misc_strategy(),
    ]
}

/// A command token: every built-in, numerics and unregistered words.
fn command_strategy() -> impl Strategy<Value = String> {
    let builtins: Vec<String> = MessageKind::ALL
        .iter()
        .filter_map(|k| k.command())
        .map(str::to_owned)
        .collect();
    prop_oneof![
        3 => prop::sample::select(builtins),
        1 => prop::string::string_regex("[0-9]{3}").expect("valid regex"),
        1 => prop::string::string_regex("X[A-Z]{2,6}").expect("valid regex"),
    ]
}

/// Trailing text as it may appear on the wire: empty, colon-led, with
/// spaces or CTCP delimiters.
fn wire_trailing_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(":".to_string()),
        Just(" ".to_string()),
        Just("\x01".to_string()),
        Just("\x01ACTION \x01".to_string()),
        Just("\x01ACTION waves".to_string()),
        Just("\x01VERSION\x01".to_string()),
        prop::string::string_regex("[^\\r\\n\\x00]{0,60}").expect("valid regex"),
    ]
}

/// A raw line `[:prefix ]CMD [mid ...] [:trailing]`.
fn wire_line_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of(token_strategy()),
        command_strategy(),
        prop::collection::vec(token_strategy(), 0..5),
        prop::option::of(wire_trailing_strategy()),
    )
        .prop_map(|(prefix, command, middle, trailing)| {
            let mut line = String::new();
            if let Some(prefix) = prefix {
                line.push(':');
                line.push_str(&prefix);
                line.push(' ');
            }
            line.push_str(&command);
            for param in middle {
                line.push(' ');
                line.push_str(&param);
            }
            if let Some(trailing) = trailing {
                line.push_str(" :");
                line.push_str(&trailing);
            }
            line
        })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn serialized_body_parses_back(body in body_strategy()) {
        let registry = Registry::with_builtins();
        let line = body.to_string();

        let parsed = registry.parse_line(&line).expect("serialized line splits");
        prop_assert!(parsed.error().is_none(), "error for {:?}", line);
        prop_assert_eq!(parsed.kind(), body.kind());
        prop_assert_eq!(parsed.body(), &body, "line: {:?}", line);
    }

    #[test]
    fn second_round_is_identical(body in body_strategy()) {
        let registry = Registry::with_builtins();
        let first = registry.parse_line(&body.to_string()).unwrap();
        let second = registry.parse_line(&first.to_string()).unwrap();
        prop_assert_eq!(first.body(), second.body());
        prop_assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn parsed_line_survives_serialization(line in wire_line_strategy()) {
        let registry = Registry::with_builtins();
        let first = registry.parse_line(&line).expect("generated line splits");
        let written = first.to_string();
        let second = registry.parse_line(&written).expect("serialized line splits");
        prop_assert_eq!(first.body(), second.body(), "{:?} -> {:?}", line, written);
    }

    #[test]
    fn dispatch_never_fails(
        command in "[A-Za-z0-9]{1,12}",
        params in prop::collection::vec(text_strategy(), 0..6),
    ) {
        let registry = Registry::with_builtins();
        let msg = registry.create(&command, "", params);
        // Only a numeric kind can carry a structural error.
        if msg.error().is_some() {
            prop_assert_eq!(msg.kind(), MessageKind::Numeric);
        }
    }

    #[test]
    fn splitter_never_panics(line in "[^\\x00]{0,300}") {
        let _ = Registry::with_builtins().parse_line(&line);
    }
}
