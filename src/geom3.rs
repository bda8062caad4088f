pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type Iso3 = parry3d_f64::na::Isometry3<f64>;
pub type UnitQuat = parry3d_f64::na::UnitQuaternion<f64>;
