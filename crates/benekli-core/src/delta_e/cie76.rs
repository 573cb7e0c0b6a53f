//! CIE76: straight-line distance in L*a*b*

use crate::color::Lab;

/// Calculate the CIE76 color difference (Euclidean distance)
#[inline]
pub fn delta_e_76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}
