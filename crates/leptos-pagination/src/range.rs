//! Page Range
//!
//! Computes the compact button sequence for a pagination control.

/// Neighbours shown on each side of the current page
pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// One entry in a rendered pagination control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// Concrete page number (1-indexed)
    Page(u32),
    /// Collapsed run of pages
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageToken::Page(p) => Some(*p),
            PageToken::Ellipsis => None,
        }
    }
}

/// Build the page tokens for `current_page` out of `total_pages`.
///
/// The result always holds at most `sibling_count * 2 + 5` tokens: first page,
/// last page, current page, two ellipses and the siblings around current.
/// When everything fits, every page is listed without ellipses.
///
/// `total_pages == 0` is treated as a single page and `current_page` is
/// clamped into `[1, total_pages]`.
pub fn page_range(current_page: u32, total_pages: u32, sibling_count: u32) -> Vec<PageToken> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);
    let total_slots = sibling_count.saturating_mul(2).saturating_add(5);

    if total_pages <= total_slots {
        return pages(1, total_pages);
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages - 1;

    // Contiguous run shown next to a single ellipsis. No overflow here:
    // reaching this point means total_slots did not saturate.
    let edge_count = total_slots - 2;

    match (show_left_dots, show_right_dots) {
        (false, true) => {
            let mut tokens = pages(1, edge_count);
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total_pages));
            tokens
        }
        (true, false) => {
            let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
            tokens.extend(pages(total_pages - edge_count + 1, total_pages));
            tokens
        }
        _ => {
            // (false, false) cannot happen once total_pages > total_slots
            let mut tokens = vec![PageToken::Page(1), PageToken::Ellipsis];
            tokens.extend(pages(left_sibling, right_sibling));
            tokens.push(PageToken::Ellipsis);
            tokens.push(PageToken::Page(total_pages));
            tokens
        }
    }
}

fn pages(first: u32, last: u32) -> Vec<PageToken> {
    (first..=last).map(PageToken::Page).collect()
}
