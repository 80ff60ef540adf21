use rstest::rstest;
use tally_common::{canvas::DrawMargin, types::Rect};
use tally_layout::{
    axis::CartesianAxis,
    context::{ColumnGroupContext, SeriesId},
    error::TallyLayoutError,
    point::HoverArea,
    tooltip::{points_tooltip_location, tooltip_location, TooltipPosition},
    view::ChartViewState,
    CartesianSeries, ColumnSeries, DrawBucket, PaintTasks, RectShape,
};
use tally_scales::range::ValueRange;

#[rstest]
#[case(TooltipPosition::Top, [5.0, 10.0])]
#[case(TooltipPosition::Bottom, [5.0, 25.0])]
#[case(TooltipPosition::Left, [-30.0, 17.5])]
#[case(TooltipPosition::Right, [40.0, 17.5])]
#[case(TooltipPosition::Center, [5.0, 17.5])]
fn test_single_area(
    #[case] position: TooltipPosition,
    #[case] expected: [f32; 2],
) -> Result<(), TallyLayoutError> {
    let area = HoverArea::from(Rect::new(10.0, 20.0, 30.0, 5.0));
    assert_eq!(
        tooltip_location([&area], position, [40.0, 10.0])?,
        Some(expected)
    );
    Ok(())
}

#[test]
fn test_bounding_box_of_several_areas() -> Result<(), TallyLayoutError> {
    let areas = [
        HoverArea::from(Rect::new(0.0, 50.0, 10.0, 50.0)),
        HoverArea::from(Rect::new(20.0, 10.0, 10.0, 90.0)),
    ];
    // Box {0, 10, 30, 90}
    assert_eq!(
        tooltip_location(&areas, TooltipPosition::Top, [10.0, 4.0])?,
        Some([10.0, 6.0])
    );
    assert_eq!(
        tooltip_location(&areas, TooltipPosition::Right, [10.0, 4.0])?,
        Some([30.0, 53.0])
    );
    Ok(())
}

#[test]
fn test_parsed_position_names() -> Result<(), TallyLayoutError> {
    let area = HoverArea::from(Rect::new(0.0, 0.0, 10.0, 10.0));
    let position = TooltipPosition::parse("bottom")?;
    assert_eq!(
        tooltip_location([&area], position, [2.0, 2.0])?,
        Some([4.0, 10.0])
    );
    assert!(matches!(
        TooltipPosition::parse("nowhere"),
        Err(TallyLayoutError::UnsupportedAnchor(_))
    ));
    Ok(())
}

#[test]
fn test_anchor_on_measured_columns() -> Result<(), TallyLayoutError> {
    let view = ChartViewState::new(DrawMargin::new([0.0, 0.0], [1000.0, 200.0]));
    let x_axis = CartesianAxis::x().with_data_bounds(ValueRange { min: -0.5, max: 9.5 });
    let y_axis = CartesianAxis::y().with_data_bounds(ValueRange {
        min: -10.0,
        max: 10.0,
    });
    let context = ColumnGroupContext::new([SeriesId(1)]);
    let mut series = ColumnSeries::<RectShape>::new(SeriesId(1)).with_points([(2.0, 5.0)]);

    // Nothing to anchor on before the first pass
    assert_eq!(
        points_tooltip_location(series.points(), TooltipPosition::Top, [20.0, 10.0])?,
        None
    );

    series.measure(
        &view,
        &mut PaintTasks::new(),
        &x_axis,
        &y_axis,
        &context,
        &mut DrawBucket::new(),
    )?;

    // Column {235, 50, 30, 50}
    assert_eq!(
        points_tooltip_location(series.points(), TooltipPosition::Top, [20.0, 10.0])?,
        Some([240.0, 40.0])
    );
    Ok(())
}
