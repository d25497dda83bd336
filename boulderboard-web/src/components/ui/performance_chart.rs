use crate::i18n::{fmt_average, t, tr};
use boulderboard_core::{ChartPoint, peak_average};
use std::collections::BTreeMap;
use yew::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 32.0;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub points: Vec<ChartPoint>,
}

/// Plot coordinates for the series inside a `width` x `height` box with
/// `pad` on every side. The y-axis runs from 0 to the highest average; a
/// single point sits in the horizontal middle.
#[must_use]
pub fn plot_coordinates(points: &[ChartPoint], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let peak = peak_average(points);
    let inner_w = (width - 2.0 * pad).max(0.0);
    let inner_h = (height - 2.0 * pad).max(0.0);
    let steps = points.len().saturating_sub(1);

    points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if steps == 0 {
                pad + inner_w / 2.0
            } else {
                pad + inner_w * idx as f64 / steps as f64
            };
            let ratio = if peak > 0.0 { point.average / peak } else { 0.0 };
            let y = height - pad - inner_h * ratio;
            (x, y)
        })
        .collect()
}

fn polyline_attr(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[function_component(PerformanceChart)]
pub fn performance_chart(p: &Props) -> Html {
    if p.points.is_empty() {
        return html! {
            <section class="chart-panel">
                <h2>{ t("chart.title") }</h2>
                <p class="empty-state">{ t("chart.empty") }</p>
            </section>
        };
    }

    let coords = plot_coordinates(&p.points, WIDTH, HEIGHT, PAD);
    let peak = fmt_average(peak_average(&p.points));
    let baseline = HEIGHT - PAD;
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");

    html! {
        <section class="chart-panel">
            <h2>{ t("chart.title") }</h2>
            <svg class="performance-chart" viewBox={view_box} role="img" aria-label={t("chart.aria")}>
                <line class="axis" x1={PAD.to_string()} y1={baseline.to_string()} x2={(WIDTH - PAD).to_string()} y2={baseline.to_string()} />
                <line class="axis" x1={PAD.to_string()} y1={PAD.to_string()} x2={PAD.to_string()} y2={baseline.to_string()} />
                <text class="axis-label" x="4" y={PAD.to_string()}>{ peak }</text>
                <text class="axis-label" x="4" y={baseline.to_string()}>{"0"}</text>
                <polyline class="series" fill="none" points={polyline_attr(&coords)} />
                { for p.points.iter().zip(&coords).map(|(point, (x, y))| {
                    let average = fmt_average(point.average);
                    let mut args = BTreeMap::new();
                    args.insert("date", point.label.as_str());
                    args.insert("average", average.as_str());
                    html! {
                        <circle class="point" cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="4">
                            <title>{ tr("chart.point", Some(&args)) }</title>
                        </circle>
                    }
                }) }
                { for p.points.iter().zip(&coords).map(|(point, (x, _))| html! {
                    <text class="tick" x={format!("{x:.1}")} y={(HEIGHT - 8.0).to_string()} text-anchor="middle">
                        { point.label.clone() }
                    </text>
                }) }
            </svg>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn point(day: u32, average: f64) -> ChartPoint {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        ChartPoint {
            date,
            label: boulderboard_core::date_label(date),
            average,
            samples: 1,
        }
    }

    #[test]
    fn peak_touches_top_and_zero_sits_on_baseline() {
        let coords = plot_coordinates(&[point(1, 0.0), point(2, 100.0)], 200.0, 100.0, 10.0);
        assert_eq!(coords, vec![(10.0, 90.0), (190.0, 10.0)]);
    }

    #[test]
    fn single_point_is_centered() {
        let coords = plot_coordinates(&[point(1, 50.0)], 200.0, 100.0, 10.0);
        assert_eq!(coords, vec![(100.0, 10.0)]);
    }

    #[test]
    fn renders_series_and_empty_state() {
        crate::i18n::set_lang("en");
        let props = Props {
            points: vec![point(1, 40.0), point(2, 60.0)],
        };
        let html = block_on(LocalServerRenderer::<PerformanceChart>::with_props(props).render());
        assert!(html.contains("<polyline"));
        assert!(html.contains("5/2/2024"));
        assert!(html.contains("60.0"));

        let html = block_on(
            LocalServerRenderer::<PerformanceChart>::with_props(Props { points: Vec::new() })
                .render(),
        );
        assert!(html.contains("Not enough data"));
        assert!(!html.contains("<svg"));
    }
}
