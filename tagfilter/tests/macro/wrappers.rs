use tagfilter::prelude::*;

#[derive(FilterSource)]
struct TicketFilter<'a> {
    #[filter = "opt:rlike"]
    subject: &'a str,
    #[filter = "opt:in"]
    labels: Option<Vec<&'a str>>,
    #[filter = "opt:="]
    urgent: Box<bool>,
    #[filter = "-"]
    r#ref: char,
}

fn main() {
    let filter = TicketFilter {
        subject: "^crash",
        labels: None,
        urgent: Box::new(true),
        r#ref: 'x',
    };

    let scope = tagfilter::build_from_struct(&filter).unwrap();
    assert_eq!(scope.condition(), Some("subject rlike ? AND urgent = ?"));

    let rules = [Rule::new("ref", Operator::Eq)];
    let scope = tagfilter::build_from_rules(&rules, &filter).unwrap();
    assert_eq!(scope.params(), &[Value::from("x")]);
}
