use argh::FromArgs;
use kornia_rectmap::{Point2, Rectangle, RectangleTransformer, ValidationConfig};

/// Maps the corners of a rectangle between two grids
#[derive(Debug, FromArgs)]
struct Args {
    /// corners of the rectangle in grid 1 as "x1,y1;x2,y2;x3,y3;x4,y4"
    #[argh(
        option,
        default = "Rectangle::from([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)])",
        from_str_fn(parse_rectangle)
    )]
    rect1: Rectangle,

    /// corners of the rectangle in grid 2 as "x1,y1;x2,y2;x3,y3;x4,y4"
    #[argh(
        option,
        default = "Rectangle::from([(205.0, -55.0), (385.0, -55.0), (205.0, 160.0), (385.0, 160.0)])",
        from_str_fn(parse_rectangle)
    )]
    rect2: Rectangle,

    /// reject rectangles that are degenerate or wound differently
    #[argh(switch, short = 'v')]
    validate: bool,

    /// relative tolerance used with --validate
    #[argh(option, short = 't', default = "1e-9")]
    tolerance: f64,
}

fn parse_point(value: &str) -> Result<Point2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{value}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point2::new(x, y))
}

fn parse_rectangle(value: &str) -> Result<Rectangle, String> {
    let corners = value
        .split(';')
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;
    let corners: [Point2; 4] = corners
        .try_into()
        .map_err(|c: Vec<Point2>| format!("expected 4 corners but got {}", c.len()))?;
    Ok(Rectangle::from_corners(corners))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let transformer = if args.validate {
        let config = ValidationConfig::new(args.tolerance);
        RectangleTransformer::try_new(args.rect1, args.rect2, &config)?
    } else {
        RectangleTransformer::new(args.rect1, args.rect2)
    };

    log::info!("grid 1 -> grid 2 matrix: {:?}", transformer.matrix_1_to_2());

    for point in args.rect1.corners() {
        let mapped = transformer.transform_from_grid1_to_grid2(point);
        println!(
            "Point ({}, {}) in grid 1 -> ({}, {}) in grid 2",
            point.x, point.y, mapped.x, mapped.y
        );
    }

    for point in args.rect2.corners() {
        let mapped = transformer.transform_from_grid2_to_grid1(point);
        println!(
            "Point ({}, {}) in grid 2 -> ({}, {}) in grid 1",
            point.x, point.y, mapped.x, mapped.y
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rectangle() -> Result<(), String> {
        let rect = parse_rectangle("0,0; 2, 0;0,1;2,1")?;
        assert_eq!(rect.corner2, Point2::new(2.0, 0.0));
        assert_eq!(rect.corner4, Point2::new(2.0, 1.0));

        assert!(parse_rectangle("0,0;1,0;0,1").is_err());
        assert!(parse_rectangle("0,0;1,0;0,1;a,b").is_err());
        assert!(parse_rectangle("0 0;1,0;0,1;1,1").is_err());
        Ok(())
    }
}
