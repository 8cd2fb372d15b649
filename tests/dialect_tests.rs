use edilex::{edi, parse, Dialect, Error, SpecialCharacters};

/// Builds a full-width ISA header with the given delimiters; the component
/// separator sits at character offset 104 and the segment separator at 105.
fn isa_header(element: char, component: char, segment: char) -> String {
    let fields = [
        "00", "          ", "00", "          ", "ZZ", "SENDERID       ", "ZZ",
        "RECEIVERID     ", "240101", "1200", "U", "00401", "000000001", "0", "P",
    ];
    let mut header = String::from("ISA");
    for field in fields {
        header.push(element);
        header.push_str(field);
    }
    header.push(element);
    header.push(component);
    header.push(segment);
    assert_eq!(header.chars().count(), 106);
    header
}

#[test]
fn test_una_overrides_all_delimiters() {
    let result = parse("UNA|^,! ~UNB^IATB|1^X~QTY^1~").unwrap();
    assert_eq!(result, edi![["UNB", ["IATB", 1], ["X"]], ["QTY", [1]]]);
}

#[test]
fn test_line_break_inside_una_header_is_folded_before_detection() {
    // The wrap lands between the tag and the service characters; folding
    // must happen before the header is read or the delimiters shift.
    let result = parse("UNA\n|^,! ~UNB^1~").unwrap();
    assert_eq!(result, edi![["UNB", [1]]]);
}

#[test]
fn test_una_segment_never_appears_in_output() {
    let result = parse("UNA:+.? 'QTY+1'").unwrap();
    assert_eq!(result, edi![["QTY", [1]]]);
}

#[test]
fn test_una_escape_character_override() {
    // '!' is the escape character; '^' is the element separator.
    let result = parse("UNA|^,! ~FTX^a!^b~").unwrap();
    assert_eq!(result, edi![["FTX", ["a^b"]]]);
}

#[test]
fn test_truncated_una_header() {
    assert_eq!(
        parse("UNA:+."),
        Err(Error::TruncatedHeader {
            dialect: Dialect::Edifact,
            expected: 9,
            found: 6,
        })
    );
}

#[test]
fn test_tradacoms_tag_separator() {
    let result = parse("STX=ANA:1+5013546123456:SKY'MHD=1+ORDHDR:9'").unwrap();
    assert_eq!(
        result,
        edi![
            ["STX", ["ANA", 1], [5013546123456i64, "SKY"]],
            ["MHD", [1], ["ORDHDR", 9]]
        ]
    );
}

#[test]
fn test_tradacoms_detection_requires_every_segment() {
    // One segment without '=' at offset 3 means no rewrite anywhere, so the
    // '=' stays inside the tag piece.
    let result = parse("STX=ANA:1'TYP+0430'").unwrap();
    assert_eq!(result[0].tag(), Some("STX=ANA:1"));
    assert_eq!(result[1].tag(), Some("TYP"));
}

#[test]
fn test_ansix12_delimiters_from_isa() {
    let input = format!(
        "{}GS*PO*SENDER*RECEIVER*20240101*1200*1*X*004010~ST*850*000000010~",
        isa_header('*', '>', '~')
    );
    let result = parse(&input).unwrap();

    // The ISA segment itself is kept; only EDIFACT discards its header
    // segment.
    assert_eq!(result[0].tag(), Some("ISA"));
    let expected = edi![
        [
            "GS",
            ["PO"],
            ["SENDER"],
            ["RECEIVER"],
            [20240101],
            [1200],
            [1],
            ["X"],
            ["004010"]
        ],
        ["ST", [850], ["000000010"]]
    ];
    assert_eq!(&result[1..], &expected[..]);
}

#[test]
fn test_ansix12_component_separator() {
    let input = format!("{}SV1*HC>99213*500*UN*1~", isa_header('*', '>', '~'));
    let result = parse(&input).unwrap();
    assert_eq!(
        result[1],
        edi![["SV1", ["HC", 99213], [500], ["UN"], [1]]][0]
    );
}

#[test]
fn test_ansix12_newline_segment_separator() {
    // X12 input is never line-folded; here the newline IS the segment
    // separator.
    let input = format!("{}GS*PO*1~ST*850*1~", isa_header('*', '>', '\n'))
        .replace('~', "\n");
    let result = parse(&input).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result[1].tag(), Some("GS"));
    assert_eq!(result[2].tag(), Some("ST"));
}

#[test]
fn test_ansix12_has_no_escaping() {
    // '?' has no meaning in X12 data.
    let input = format!("{}REF*D9*?value~", isa_header('*', '>', '~'));
    let result = parse(&input).unwrap();
    assert_eq!(result[1], edi![["REF", ["D9"], ["?value"]]][0]);
}

#[test]
fn test_truncated_isa_header() {
    let err = parse("ISA*00*way too short~").unwrap_err();
    assert_eq!(
        err,
        Error::TruncatedHeader {
            dialect: Dialect::Ansix12,
            expected: 106,
            found: 21,
        }
    );
}

#[test]
fn test_detected_tables_per_dialect() {
    assert_eq!(
        edilex::special_characters("UNB+1'").unwrap(),
        SpecialCharacters::edifact()
    );
    assert_eq!(
        edilex::special_characters("STX=ANA:1'").unwrap(),
        SpecialCharacters::tradacoms()
    );
    let chars = edilex::special_characters(&isa_header('*', '>', '~')).unwrap();
    assert_eq!(chars, SpecialCharacters::ansix12('*', '>', '~'));
}
