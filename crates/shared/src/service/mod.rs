pub mod account;
pub mod card;
pub mod customer;

/// Zero-based page window over an already-filtered, already-ordered set.
pub(crate) fn paginate<T>(items: Vec<T>, page: i32, size: i32) -> Vec<T> {
    let page = page.max(0) as usize;
    let size = if size > 0 { size as usize } else { 10 };

    items.into_iter().skip(page * size).take(size).collect()
}
