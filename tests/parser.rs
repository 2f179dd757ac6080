use book_stats::ingestion::RecordParser;

#[test]
fn parse_line_maps_values_to_header_columns() {
    let mut parser = RecordParser::new();
    parser.read_header("id,title,author,language");

    let values = parser
        .parse_line(Some("123,Rendezvous with Rama,Arthur C. Clarke,English"))
        .unwrap();

    assert_eq!(values["id"], "123");
    assert_eq!(values["title"], "Rendezvous with Rama");
    assert_eq!(values["author"], "Arthur C. Clarke");
    assert_eq!(values["language"], "English");
}

#[test]
fn parse_line_end_of_input_is_none() {
    let mut parser = RecordParser::new();
    parser.read_header("id,title");
    assert_eq!(parser.parse_line(None), None);
}

#[test]
fn parse_line_wrong_field_count_is_empty_not_partial() {
    let mut parser = RecordParser::new();
    parser.read_header("id,title");

    assert!(parser.parse_line(Some("123")).unwrap().is_empty());
    assert!(parser.parse_line(Some("123,Rama,extra")).unwrap().is_empty());
    assert!(parser.parse_line(Some("")).unwrap().is_empty());
}

#[test]
fn every_well_formed_line_yields_one_full_map() {
    let mut parser = RecordParser::new();
    parser.read_header("a,b,c");
    let lines = ["1,2,3", "4,5,6", "7,8,9", ",,9"];

    let maps: Vec<_> = lines
        .iter()
        .map(|l| parser.parse_line(Some(*l)).unwrap())
        .collect();

    assert_eq!(maps.len(), lines.len());
    assert!(maps.iter().all(|m| m.len() == 3));
    assert_eq!(maps[1]["b"], "5");
    assert_eq!(maps[3]["a"], "");
    assert_eq!(maps[3]["c"], "9");
}

#[test]
fn trailing_empty_fields_do_not_count() {
    let mut parser = RecordParser::new();
    parser.read_header("a,b,c");

    assert!(parser.parse_line(Some(",,")).unwrap().is_empty());
    assert!(parser.parse_line(Some("1,2,")).unwrap().is_empty());
    assert_eq!(parser.parse_line(Some("1,,3")).unwrap()["b"], "");
}

#[test]
fn parsers_do_not_share_headers() {
    let mut books = RecordParser::new();
    books.read_header("id,title");
    let mut other = RecordParser::new();
    other.read_header("x,y,z");

    assert_eq!(books.parse_line(Some("1,Rama")).unwrap().len(), 2);
    assert!(books.parse_line(Some("1,2,3")).unwrap().is_empty());
    assert_eq!(other.parse_line(Some("1,2,3")).unwrap().len(), 3);
}
