#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dailyrep::libs::chart::{label_interval, nice_ceiling, ChartLayout, FlowLayout, Rect};
    use dailyrep::libs::flow::FlowTable;
    use dailyrep::libs::timeslot::Timeslot;

    fn points(values: &[f64]) -> Vec<(NaiveDate, f64)> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        start.iter_days().zip(values.iter().copied()).collect()
    }

    #[test]
    fn test_label_interval() {
        assert_eq!(label_interval(0), 1);
        assert_eq!(label_interval(3), 1);
        assert_eq!(label_interval(19), 1);
        assert_eq!(label_interval(20), 2);
        assert_eq!(label_interval(31), 3);
        assert_eq!(label_interval(365), 36);
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-5.0), 1.0);
        assert_eq!(nice_ceiling(1.0), 1.0);
        assert_eq!(nice_ceiling(3.0), 5.0);
        assert_eq!(nice_ceiling(1500.0), 2000.0);
        assert_eq!(nice_ceiling(7200.0), 10000.0);
    }

    #[test]
    fn test_bars_fit_plot() {
        let plot = Rect::new(20.0, 30.0, 100.0, 50.0);
        let layout = ChartLayout::new(&points(&[0.0, 500.0, 1000.0, 250.0]), plot);

        assert_eq!(layout.bars.len(), 4);
        assert_eq!(layout.y_max, 1000.0);
        for bar in &layout.bars {
            assert!(bar.rect.x >= plot.x && bar.rect.right() <= plot.right() + 1e-3);
            assert_eq!(bar.rect.y, plot.y);
            assert!(bar.rect.top() <= plot.top() + 1e-3);
        }
        assert_eq!(layout.bars[0].rect.height, 0.0);
        assert!((layout.bars[2].rect.height - plot.height).abs() < 1e-3);
        assert!((layout.bars[1].rect.height - plot.height / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_y_ticks_span_plot() {
        let plot = Rect::new(0.0, 10.0, 100.0, 50.0);
        let layout = ChartLayout::new(&points(&[3.0, 1.0]), plot);

        assert_eq!(layout.y_ticks.len(), 6);
        assert_eq!(layout.y_ticks.first(), Some(&(10.0, 0.0)));
        let (top_y, top_value) = *layout.y_ticks.last().unwrap();
        assert!((top_y - plot.top()).abs() < 1e-3);
        assert_eq!(top_value, 5.0);
    }

    #[test]
    fn test_x_labels_are_thinned() {
        let plot = Rect::new(0.0, 0.0, 310.0, 50.0);
        let layout = ChartLayout::new(&points(&[1.0; 31]), plot);

        assert_eq!(layout.x_labels.len(), 11);
        assert_eq!(layout.x_labels[0].1, "2024-01-01");
        assert_eq!(layout.x_labels[1].1, "2024-01-04");
    }

    #[test]
    fn test_area_outline_is_closed_on_baseline() {
        let plot = Rect::new(0.0, 5.0, 30.0, 10.0);
        let layout = ChartLayout::new(&points(&[1.0, 2.0, 1.0]), plot);
        let outline = layout.area_outline();

        assert_eq!(outline.len(), 5);
        assert_eq!(outline.first().unwrap().1, plot.y);
        assert_eq!(outline.last().unwrap().1, plot.y);
        assert!(ChartLayout::new(&[], plot).area_outline().is_empty());
    }

    #[test]
    fn test_flow_layout() {
        let mut flow = FlowTable::default();
        flow.record("Room A", Some(Timeslot::Morning));
        flow.record("Room A", Some(Timeslot::Evening));
        flow.record("Room B", Some(Timeslot::Evening));
        flow.record("Room B", None);

        let area = Rect::new(50.0, 20.0, 100.0, 200.0);
        let layout = FlowLayout::new(&flow, area);

        assert_eq!(layout.sources.len(), 2);
        assert_eq!(layout.targets.len(), 3);
        assert_eq!(layout.links.len(), 4);
        assert_eq!(layout.links.iter().map(|link| link.count).sum::<u64>(), 4);

        for node in layout.sources.iter().chain(layout.targets.iter()) {
            assert!(node.rect.y >= area.y - 1e-3);
            assert!(node.rect.top() <= area.top() + 1e-3);
        }

        let band = layout.band_outline(&layout.links[0], 8);
        assert_eq!(band.len(), 18);
        assert_eq!(band[0].0, layout.sources[0].rect.right());
        assert_eq!(band[8].0, layout.targets[layout.links[0].target].rect.x);
    }

    #[test]
    fn test_flow_layout_empty() {
        let layout = FlowLayout::new(&FlowTable::default(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(layout.sources.is_empty());
        assert!(layout.links.is_empty());
    }
}
