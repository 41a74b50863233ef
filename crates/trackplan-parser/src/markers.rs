//! Reading and writing the `km,label,side,icon` marker encoding.

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::{digit0, digit1},
    combinator::{alt, opt},
    error::{ContextError, ErrMode},
    token::one_of,
};

use trackplan_core::marker::{Icon, Marker, Side};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Parse the longest leading decimal number of a field.
///
/// Trailing text is ignored, so `47.5km` reads as `47.5` and `47e` as `47`.
/// An exponent is only taken when digits follow the `e`.
fn leading_number(input: &mut &str) -> IResult<f64> {
    let mantissa = alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void()));
    let exponent = opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1));

    (opt(one_of(['+', '-'])), mantissa, exponent)
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

fn parse_km(field: &str) -> Option<f64> {
    let mut input = field;
    leading_number(&mut input)
        .ok()
        .filter(|km: &f64| km.is_finite())
}

/// Maps a side word, treating blank and unknown words as [`Side::Top`].
fn parse_side(field: &str) -> Side {
    if field.is_empty() {
        return Side::default();
    }
    field.parse().unwrap_or_else(|err| {
        debug!(field, err:%; "Unknown side, drawing on top track");
        Side::Top
    })
}

/// Maps an icon word. Blank means [`Icon::Signal`], unknown words fall back to
/// the plain dot of [`Icon::Note`].
fn parse_icon(field: &str) -> Icon {
    if field.is_empty() {
        return Icon::default();
    }
    field.parse().unwrap_or_else(|err| {
        debug!(field, err:%; "Unknown icon, drawing a plain dot");
        Icon::Note
    })
}

fn parse_record(line: &str) -> Option<Marker> {
    let mut fields = line.split(',').map(str::trim);

    let km = parse_km(fields.next().unwrap_or_default())?;
    let label = fields.next().unwrap_or_default();
    let side = parse_side(fields.next().unwrap_or_default());
    let icon = parse_icon(fields.next().unwrap_or_default());

    Marker::new(km, label, side, icon)
}

/// Parse marker records, one per line.
///
/// Blank lines are ignored. Lines whose `km` field is missing, unreadable or
/// not finite are dropped. Input order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```
/// # use trackplan_core::marker::Side;
/// let markers = trackplan_parser::parse_markers("47.0,Rerail\n\nnot a marker\n49.2,Tamp,mid");
/// assert_eq!(markers.len(), 2);
/// assert_eq!(markers[0].label(), "Rerail");
/// assert_eq!(markers[1].side(), Side::Mid);
/// ```
pub fn parse_markers(text: &str) -> Vec<Marker> {
    let markers: Vec<Marker> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .filter_map(|(line_number, line)| {
            let marker = parse_record(line);
            if marker.is_none() {
                debug!(line_number, line; "Skipping marker record without a readable km");
            }
            marker
        })
        .collect();

    trace!(count = markers.len(); "Parsed marker records");
    markers
}

/// Write markers in the compact encoding using the shortest exact km text.
///
/// `parse_markers(&format_markers(m)) == m` holds for labels without commas
/// or line breaks.
///
/// ```
/// # use trackplan_core::marker::{Icon, Marker, Side};
/// let marker = Marker::new(47.25, "Rerail", Side::Top, Icon::Signal).unwrap();
/// assert_eq!(trackplan_parser::format_markers(&[marker]), "47.25,Rerail,top,signal");
/// ```
pub fn format_markers(markers: &[Marker]) -> String {
    join_records(markers, |km| km.to_string())
}

/// Write markers in the compact encoding with three-decimal km text.
///
/// ```
/// # use trackplan_core::marker::{Icon, Marker, Side};
/// let marker = Marker::new(47.0, "", Side::Bottom, Icon::Detector).unwrap();
/// assert_eq!(trackplan_parser::format_markers_fixed(&[marker]), "47.000,,bottom,detector");
/// ```
pub fn format_markers_fixed(markers: &[Marker]) -> String {
    join_records(markers, |km| format!("{km:.3}"))
}

fn join_records(markers: &[Marker], format_km: impl Fn(f64) -> String) -> String {
    markers
        .iter()
        .map(|marker| {
            format!(
                "{},{},{},{}",
                format_km(marker.km()),
                marker.label(),
                marker.side(),
                marker.icon()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_records_with_defaults() {
        let markers = parse_markers("47.000,Rerail,top,signal\n48.5,,bottom,\n");

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].km(), 47.0);
        assert_eq!(markers[0].label(), "Rerail");
        assert_eq!(markers[0].side(), Side::Top);
        assert_eq!(markers[0].icon(), Icon::Signal);

        assert_eq!(markers[1].km(), 48.5);
        assert_eq!(markers[1].label(), "");
        assert_eq!(markers[1].side(), Side::Bottom);
        assert_eq!(markers[1].icon(), Icon::Signal);
    }

    #[test]
    fn test_km_only_record() {
        let markers = parse_markers("52.1");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].label(), "");
        assert_eq!(markers[0].side(), Side::Top);
        assert_eq!(markers[0].icon(), Icon::Signal);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let markers = parse_markers("  47.2 ,  Weigh bridge ,  mid , bridge  ");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].km(), 47.2);
        assert_eq!(markers[0].label(), "Weigh bridge");
        assert_eq!(markers[0].side(), Side::Mid);
        assert_eq!(markers[0].icon(), Icon::Bridge);
    }

    #[test]
    fn test_unreadable_km_dropped_silently() {
        let markers = parse_markers("abc,Rerail\n,Empty\n47.0,Kept\n");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].label(), "Kept");
    }

    #[test]
    fn test_non_finite_km_dropped() {
        let markers = parse_markers("inf,Far\nNaN,Nowhere\ninfinity,Beyond\n1.5,Near");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].label(), "Near");
    }

    #[test]
    fn test_leading_number_prefix() {
        let markers = parse_markers("47.5km,Rerail");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].km(), 47.5);
    }

    #[test]
    fn test_dangling_exponent_is_ignored() {
        let markers = parse_markers("47e,a\n47.5e,b\n47.5E-,c\n4.75e1,d\n+47.,e\n.5,f");
        let kms: Vec<_> = markers.iter().map(Marker::km).collect();
        assert_eq!(kms, [47.0, 47.5, 47.5, 47.5, 47.0, 0.5]);
    }

    #[test]
    fn test_longest_leading_number() {
        let markers = parse_markers("47.5.3,a\n0x10,b\n1e999,c\n-,d\n.,e");
        let kms: Vec<_> = markers.iter().map(Marker::km).collect();
        assert_eq!(kms, [47.5, 0.0]);
    }

    #[test]
    fn test_negative_and_integer_km() {
        let markers = parse_markers("-1.25,Before zero\n48,Whole");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].km(), -1.25);
        assert_eq!(markers[1].km(), 48.0);
    }

    #[test]
    fn test_blank_lines_ignored_and_order_preserved() {
        let markers = parse_markers("\n\n49.0,B\n   \n47.0,A\n49.0,B\n");
        let labels: Vec<_> = markers.iter().map(Marker::label).collect();
        assert_eq!(labels, ["B", "A", "B"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let markers = parse_markers("47.0,Rerail,bottom,detector,extra,fields");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].icon(), Icon::Detector);
    }

    #[test]
    fn test_unknown_words_fall_back() {
        let markers = parse_markers("47.0,Rerail,left,tunnel");
        assert_eq!(markers[0].side(), Side::Top);
        assert_eq!(markers[0].icon(), Icon::Note);
    }

    #[test]
    fn test_crlf_line_endings() {
        let markers = parse_markers("47.0,A,top,signal\r\n48.0,B,bottom,note\r\n");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].icon(), Icon::Signal);
        assert_eq!(markers[1].icon(), Icon::Note);
    }

    #[test]
    fn test_format_fixed_three_decimals() {
        let markers = parse_markers("47.25,Rerail,top,signal\n48,,bottom,detector");
        assert_eq!(
            format_markers_fixed(&markers),
            "47.250,Rerail,top,signal\n48.000,,bottom,detector"
        );
    }

    #[test]
    fn test_format_round_trip() {
        let source = "47.25,Rerail,top,signal\n48.125,WILD,bottom,detector\n49,,mid,note";
        let markers = parse_markers(source);
        assert_eq!(parse_markers(&format_markers(&markers)), markers);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn side_strategy() -> impl Strategy<Value = Side> {
        prop_oneof![Just(Side::Top), Just(Side::Bottom), Just(Side::Mid)]
    }

    fn icon_strategy() -> impl Strategy<Value = Icon> {
        prop_oneof![
            Just(Icon::Signal),
            Just(Icon::Detector),
            Just(Icon::Bridge),
            Just(Icon::Note),
        ]
    }

    fn marker_strategy() -> impl Strategy<Value = Marker> {
        (
            -1000.0f64..1000.0,
            "[A-Za-z][A-Za-z0-9 /&]{0,20}[A-Za-z0-9]",
            side_strategy(),
            icon_strategy(),
        )
            .prop_filter_map("finite km", |(km, label, side, icon)| {
                Marker::new(km, label, side, icon)
            })
    }

    fn check_format_round_trip(markers: Vec<Marker>) -> Result<(), TestCaseError> {
        let text = format_markers(&markers);
        prop_assert_eq!(parse_markers(&text), markers);
        Ok(())
    }

    proptest! {
        #[test]
        fn format_round_trip(markers in proptest::collection::vec(marker_strategy(), 0..20)) {
            check_format_round_trip(markers)?;
        }
    }
}
