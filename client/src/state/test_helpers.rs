use crate::net::types::{Page, PageList};

pub(crate) fn page(slug: &str, title: &str) -> Page {
    Page {
        id: 1,
        slug: slug.to_owned(),
        title: title.to_owned(),
        content: format!("# {title}\n\nBody of {slug}."),
        metadata: serde_json::Map::new(),
        created_at: "2024-03-01T10:00:00".to_owned(),
        updated_at: "2024-03-02T11:30:00".to_owned(),
        tags: vec!["notes".to_owned()],
    }
}

pub(crate) fn page_list(count: usize, total: u64) -> PageList {
    let pages = (0..count).map(|i| page(&format!("page-{i}"), &format!("Page {i}"))).collect();
    PageList { pages, total }
}
