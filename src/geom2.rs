pub type Point2 = parry2d_f64::na::Point2<f64>;
