use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use randforge_core::template::{Segment, Template, generate_custom};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn parse_splits_placeholders_and_literals() {
    let template = Template::parse("{u}{u}{u}-{d}{d}{d}");
    let codes: Vec<Option<char>> = template
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Placeholder { code, .. } => Some(*code),
            Segment::Literal(_) => None,
        })
        .collect();
    assert_eq!(
        codes,
        vec![
            Some('u'),
            Some('u'),
            Some('u'),
            None,
            Some('d'),
            Some('d'),
            Some('d')
        ]
    );
    assert_eq!(
        template.segments()[3],
        Segment::Literal("-".to_string())
    );
}

#[test]
fn rendered_serials_match_their_shape() {
    let template = Template::parse("{u}{u}{u}-{d}{d}{d}");
    let mut rng = rng(1);
    for _ in 0..50 {
        let value = template.render(&mut rng);
        assert_eq!(value.len(), 7);
        let chars: Vec<char> = value.chars().collect();
        assert!(chars[0..3].iter().all(|ch| ch.is_ascii_uppercase()));
        assert_eq!(chars[3], '-');
        assert!(chars[4..7].iter().all(|ch| ch.is_ascii_digit()));
    }
}

#[test]
fn unknown_placeholders_degrade_to_literal_text() {
    let template = Template::parse("id-{q}-{d}");
    let mut rng = rng(2);
    let value = template.render(&mut rng);
    assert!(value.starts_with("id-{q}-"));
    assert_eq!(value.len(), "id-{q}-".len() + 1);
    assert!(value.chars().last().is_some_and(|ch| ch.is_ascii_digit()));
}

#[test]
fn lone_and_unterminated_braces_stay_literal() {
    let mut rng = rng(3);
    assert_eq!(Template::parse("a{b}c").render(&mut rng), "a{b}c");
    assert_eq!(Template::parse("{d").render(&mut rng), "{d");
    assert_eq!(Template::parse("}{").render(&mut rng), "}{");
}

#[test]
fn doubled_braces_keep_the_outer_pair_literal() {
    let template = Template::parse("{{d}}");
    let mut rng = rng(4);
    let value = template.render(&mut rng);
    assert_eq!(value.len(), 3);
    let chars: Vec<char> = value.chars().collect();
    assert_eq!(chars[0], '{');
    assert!(chars[1].is_ascii_digit());
    assert_eq!(chars[2], '}');
}

#[test]
fn all_short_codes_draw_from_their_class() {
    let template = Template::parse("{d}{l}{u}{a}{x}{s}{w}");
    let mut rng = rng(5);
    for _ in 0..50 {
        let chars: Vec<char> = template.render(&mut rng).chars().collect();
        assert_eq!(chars.len(), 7);
        assert!(chars[0].is_ascii_digit());
        assert!(chars[1].is_ascii_lowercase());
        assert!(chars[2].is_ascii_uppercase());
        assert!(chars[3].is_ascii_alphabetic());
        assert!(chars[4].is_ascii_hexdigit() && !chars[4].is_ascii_uppercase());
        assert!(chars[5].is_ascii_punctuation());
        assert!(chars[6].is_ascii_alphanumeric());
    }
}

#[test]
fn renders_share_structure_but_not_values() {
    let template = Template::parse("{w}{w}@{l}{l}.com");
    let mut rng = rng(6);
    let first = template.render(&mut rng);
    let second = template.render(&mut rng);
    assert_eq!(first.len(), second.len());
    assert_eq!(first.find('@'), second.find('@'));
    assert!(first.ends_with(".com") && second.ends_with(".com"));
}

#[test]
fn generate_custom_renders_count_times() {
    let template = Template::parse("{x}{x}");
    let mut rng = rng(7);
    let values = generate_custom(&template, 5, &mut rng);
    assert_eq!(values.len(), 5);
    for value in values {
        assert_eq!(value.len(), 2);
    }
}

#[test]
fn template_without_placeholders_is_copied_verbatim() {
    let template = Template::parse("plain text");
    let mut rng = rng(8);
    assert_eq!(template.render(&mut rng), "plain text");
    assert_eq!(generate_custom(&template, 3, &mut rng), vec![
        "plain text",
        "plain text",
        "plain text"
    ]);
}
