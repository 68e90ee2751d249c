use serde::Serialize;
use tagfilter::prelude::*;

#[derive(Serialize, FilterSource)]
#[serde(rename_all = "camelCase")]
struct ArticleFilter {
    #[filter = "opt:like"]
    title_text: String,
    #[serde(rename = "author")]
    #[filter = "opt:=;table:authors"]
    author_name: String,
    #[filter = "opt:>"]
    view_count: u32,
}

fn main() {
    let filter = ArticleFilter {
        title_text: "rust".to_string(),
        author_name: "ada".to_string(),
        view_count: 10,
    };

    let scope = tagfilter::build_from_struct(&filter).unwrap();

    assert_eq!(
        scope.condition(),
        Some("titleText like ? AND authors.author = ? AND viewCount > ?")
    );
}
