use leptos::prelude::*;

/// Windowed page numbers: up to `window` buttons centered on the current
/// page, with first/last pages and ellipsis markers when the range is
/// clipped. `None` entries render as "…".
pub fn page_window(current: usize, total: usize, window: usize) -> Vec<Option<usize>> {
    if total == 0 {
        return Vec::new();
    }
    let half = window / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = (current + half).min(total);

    if end - start + 1 < window {
        if start == 1 {
            end = (start + window - 1).min(total);
        } else if end == total {
            start = end.saturating_sub(window - 1).max(1);
        }
    }

    let mut pages = Vec::new();
    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }
    for p in start..=end {
        pages.push(Some(p));
    }
    if end < total {
        if end < total - 1 {
            pages.push(None);
        }
        pages.push(Some(total));
    }
    pages
}

/// PaginationControls component - reusable pagination bar with a windowed
/// page list and a page-size selector.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed, backend convention)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![6, 10, 20, 50]);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
            >
                "Anterior"
            </button>

            {move || {
                let current = current_page.get();
                let total = total_pages.get();
                page_window(current, total, 5)
                    .into_iter()
                    .map(|entry| match entry {
                        Some(p) => view! {
                            <button
                                class=move || {
                                    if p == current_page.get() {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(p)
                            >
                                {p.to_string()}
                            </button>
                        }
                        .into_any(),
                        None => view! { <span class="pagination-ellipsis">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
            >
                "Siguiente"
            </button>

            <span class="pagination-info">
                {move || format!("Página {} de {}", current_page.get(), total_pages.get().max(1))}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(6);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(
            page_window(2, 3, 5),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn middle_page_gets_ellipsis_on_both_sides() {
        assert_eq!(
            page_window(10, 20, 5),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn edges_extend_the_window_instead_of_clipping() {
        assert_eq!(
            page_window(1, 20, 5),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
        );
        assert_eq!(
            page_window(20, 20, 5),
            vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn zero_pages_renders_nothing() {
        assert!(page_window(1, 0, 5).is_empty());
    }
}
