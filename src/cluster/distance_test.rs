#[cfg(test)]
mod tests {
    use crate::cluster::Point;
    use crate::cluster::distance::distance;
    use crate::cluster::test_data::eq_points;
    use quickcheck::{TestResult, quickcheck};

    #[test]
    fn test_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(distance(&p1, &p2), 5.0);
        assert_eq!(distance(&p2, &p1), 5.0);
        assert_eq!(distance(&p1, &p1), 0.0);
    }

    #[test]
    fn test_distance_is_planar() {
        // Degrees are not scaled by latitude: one degree east is 1.0 everywhere
        let equator = distance(&Point::new(10.0, 0.0), &Point::new(11.0, 0.0));
        let arctic = distance(&Point::new(10.0, 80.0), &Point::new(11.0, 80.0));
        assert_eq!(equator, 1.0);
        assert_eq!(arctic, 1.0);
    }

    #[test]
    fn test_distance_epicenters() {
        let points = eq_points();
        let expected = 2.7959193479068776;
        assert!((distance(&points[0], &points[1]) - expected).abs() < 1e-6);
        assert!((distance(&points[1], &points[0]) - expected).abs() < 1e-6);
    }

    quickcheck! {
        fn prop_distance_symmetric(ax: f64, ay: f64, bx: f64, by: f64) -> TestResult {
            if ![ax, ay, bx, by].iter().all(|v| v.is_finite()) {
                return TestResult::discard();
            }
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            TestResult::from_bool(distance(&a, &b) == distance(&b, &a))
        }

        fn prop_distance_to_self_is_zero(x: f64, y: f64) -> TestResult {
            if !x.is_finite() || !y.is_finite() {
                return TestResult::discard();
            }
            let p = Point::new(x, y);
            TestResult::from_bool(distance(&p, &p) == 0.0)
        }

        fn prop_distance_triangle_inequality(a: (i16, i16), b: (i16, i16), c: (i16, i16)) -> bool {
            let a = Point::new(a.0 as f64, a.1 as f64);
            let b = Point::new(b.0 as f64, b.1 as f64);
            let c = Point::new(c.0 as f64, c.1 as f64);
            distance(&a, &c) <= distance(&a, &b) + distance(&b, &c) + 1e-9
        }
    }
}
