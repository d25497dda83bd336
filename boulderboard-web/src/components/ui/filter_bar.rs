use crate::i18n::t;
use boulderboard_core::{CategoryFilter, Timeframe};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub timeframe: Timeframe,
    pub filter: CategoryFilter,
    pub on_timeframe: Callback<Timeframe>,
    pub on_filter: Callback<CategoryFilter>,
}

#[must_use]
pub fn timeframe_label(timeframe: Timeframe) -> String {
    t(&format!("timeframe.{}", timeframe.as_query()))
}

fn category_label(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => t("leaderboard.all_categories"),
        CategoryFilter::Only(category) => category.to_string(),
    }
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &Props) -> Html {
    let on_timeframe = {
        let cb = p.on_timeframe.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                match sel.value().parse::<Timeframe>() {
                    Ok(timeframe) => cb.emit(timeframe),
                    Err(err) => log::warn!("ignoring timeframe selection: {err}"),
                }
            }
        })
    };
    let on_filter = {
        let cb = p.on_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                match sel.value().parse::<CategoryFilter>() {
                    Ok(filter) => cb.emit(filter),
                    Err(err) => log::warn!("ignoring category selection: {err}"),
                }
            }
        })
    };

    html! {
        <div class="filter-bar">
            <label for="category-filter">{ t("leaderboard.category") }</label>
            <select id="category-filter" class="form-select" onchange={on_filter}>
                { for CategoryFilter::options().into_iter().map(|option| html! {
                    <option value={option.as_str()} selected={option == p.filter}>
                        { category_label(option) }
                    </option>
                }) }
            </select>
            <label for="timeframe-filter">{ t("leaderboard.timeframe") }</label>
            <select id="timeframe-filter" class="form-select" onchange={on_timeframe}>
                { for Timeframe::ALL.into_iter().map(|option| html! {
                    <option value={option.as_query()} selected={option == p.timeframe}>
                        { timeframe_label(option) }
                    </option>
                }) }
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boulderboard_core::Category;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn lists_every_category_and_timeframe() {
        crate::i18n::set_lang("en");
        let props = Props {
            timeframe: Timeframe::Week,
            filter: CategoryFilter::Only(Category::Jr),
            on_timeframe: Callback::noop(),
            on_filter: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
        for value in ["All", "E", "D", "C", "B", "A", "JR", "Open"] {
            assert!(html.contains(&format!("value=\"{value}\"")), "{value}");
        }
        for label in ["All time", "This week", "This month"] {
            assert!(html.contains(label), "{label}");
        }
    }
}
