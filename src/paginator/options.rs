//! Page sizes offered to the user.

use tracing::debug;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 100];

/// Parses `"5, 10,25"` into page sizes, dropping entries that are not
/// positive integers.
pub fn parse_page_size_options(input: &str) -> Vec<usize> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<usize>() {
            Ok(size) if size > 0 => Some(size),
            _ => {
                debug!("Ignoring page size option {:?}", entry);
                None
            }
        })
        .collect()
}

/// Options as shown in the selector: always contains the current page size,
/// sorted and without duplicates.
pub fn displayed_page_size_options(options: &[usize], page_size: usize) -> Vec<usize> {
    let mut displayed: Vec<usize> = options.iter().copied().filter(|size| *size > 0).collect();
    if page_size > 0 {
        displayed.push(page_size);
    }
    displayed.sort_unstable();
    displayed.dedup();
    displayed
}
