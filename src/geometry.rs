//! Slice groups and the fixed turn geometry table.
//!
//! The puzzle has 9 slice groups: three layers per axis. Each group owns a
//! pair of integer 3x3 matrices describing a 90-degree turn of that layer in
//! the positive or negative direction, plus the unit axis the layer visually
//! rotates about. The table is closed and immutable; an id outside the enum
//! cannot exist, so lookups are total.

use strum::{Display, EnumIter, EnumString};

use crate::pieces::Coord;

/// Number of slice groups (3 axes x 3 layers).
pub const GROUP_COUNT: usize = 9;

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The three slice groups along this axis, ordered by layer (-1, 0, 1).
    pub fn slices(self) -> [SliceGroup; 3] {
        match self {
            Axis::X => [SliceGroup::Left, SliceGroup::CentreFront, SliceGroup::Right],
            Axis::Y => [SliceGroup::Front, SliceGroup::CentreRight, SliceGroup::Back],
            Axis::Z => [SliceGroup::Down, SliceGroup::Equator, SliceGroup::Up],
        }
    }
}

/// A named layer of the puzzle.
///
/// Naming follows the classic face moves plus the three middle layers:
/// `centre_front` is the x = 0 layer, `centre_right` the y = 0 layer and
/// `equator` the z = 0 layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SliceGroup {
    Left,
    CentreFront,
    Right,
    Front,
    CentreRight,
    Back,
    Down,
    Equator,
    Up,
}

impl SliceGroup {
    /// The axis this layer is perpendicular to (and turns about).
    pub fn axis(self) -> Axis {
        match self {
            SliceGroup::Left | SliceGroup::CentreFront | SliceGroup::Right => Axis::X,
            SliceGroup::Front | SliceGroup::CentreRight | SliceGroup::Back => Axis::Y,
            SliceGroup::Down | SliceGroup::Equator | SliceGroup::Up => Axis::Z,
        }
    }

    /// The fixed coordinate value of this layer along its axis.
    pub fn layer(self) -> i32 {
        match self {
            SliceGroup::Left | SliceGroup::Front | SliceGroup::Down => -1,
            SliceGroup::CentreFront | SliceGroup::CentreRight | SliceGroup::Equator => 0,
            SliceGroup::Right | SliceGroup::Back | SliceGroup::Up => 1,
        }
    }

    /// The turn geometry for this layer.
    ///
    /// The three middle layers reuse the geometry of an outer layer turning
    /// about the same axis: only the member set differs, not the transform.
    pub fn spec(self) -> &'static RotationSpec {
        match self {
            SliceGroup::Front => &FRONT,
            SliceGroup::Back => &BACK,
            SliceGroup::Left => &LEFT,
            SliceGroup::Right => &RIGHT,
            SliceGroup::Down => &DOWN,
            SliceGroup::Up => &UP,
            SliceGroup::Equator => &UP,
            SliceGroup::CentreFront => &RIGHT,
            SliceGroup::CentreRight => &FRONT,
        }
    }
}

/// Integer 3x3 rotation matrix, row major.
pub type Mat3 = [[i32; 3]; 3];

/// Fixed turn geometry for one slice group.
///
/// `positive` and `negative` are mutual inverses: applying one after the
/// other is the identity on every lattice position. `axis` is the unit axis
/// a positive turn rotates about by +90 degrees (animation collaborators
/// negate it for reversed turns).
pub struct RotationSpec {
    pub axis: [f32; 3],
    pub positive: Mat3,
    pub negative: Mat3,
}

const FRONT: RotationSpec = RotationSpec {
    axis: [0.0, -1.0, 0.0],
    positive: [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
    negative: [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
};

const BACK: RotationSpec = RotationSpec {
    axis: [0.0, 1.0, 0.0],
    positive: [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
    negative: [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
};

const LEFT: RotationSpec = RotationSpec {
    axis: [-1.0, 0.0, 0.0],
    positive: [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
    negative: [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
};

const RIGHT: RotationSpec = RotationSpec {
    axis: [1.0, 0.0, 0.0],
    positive: [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
    negative: [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
};

const DOWN: RotationSpec = RotationSpec {
    axis: [0.0, 0.0, -1.0],
    positive: [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
    negative: [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
};

const UP: RotationSpec = RotationSpec {
    axis: [0.0, 0.0, 1.0],
    positive: [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
    negative: [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
};

/// Applies a turn matrix to a lattice position: `new = matrix * position`.
///
/// For the matrices in this table the result always lands back in
/// {-1, 0, 1} per coordinate, so no runtime validation is needed.
pub fn transform(matrix: &Mat3, position: Coord) -> Coord {
    let (x, y, z) = position;
    (
        matrix[0][0] * x + matrix[0][1] * y + matrix[0][2] * z,
        matrix[1][0] * x + matrix[1][1] * y + matrix[1][2] * z,
        matrix[2][0] * x + matrix[2][1] * y + matrix[2][2] * z,
    )
}

/// Derives the three slice memberships of a lattice position, one per axis.
///
/// The rule is fixed for the lifetime of the puzzle: -1/0/1 along x maps to
/// left/centre_front/right, along y to front/centre_right/back, along z to
/// down/equator/up.
pub fn classify(position: Coord) -> [SliceGroup; 3] {
    let (x, y, z) = position;
    debug_assert!(
        (-1..=1).contains(&x) && (-1..=1).contains(&y) && (-1..=1).contains(&z),
        "position {position:?} outside the lattice"
    );
    [
        match x {
            -1 => SliceGroup::Left,
            0 => SliceGroup::CentreFront,
            _ => SliceGroup::Right,
        },
        match y {
            -1 => SliceGroup::Front,
            0 => SliceGroup::CentreRight,
            _ => SliceGroup::Back,
        },
        match z {
            -1 => SliceGroup::Down,
            0 => SliceGroup::Equator,
            _ => SliceGroup::Up,
        },
    ]
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn lattice() -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| (x, y, z))))
    }

    #[test]
    fn test_positive_and_negative_are_inverses() {
        for group in SliceGroup::iter() {
            let spec = group.spec();
            for position in lattice() {
                let there = transform(&spec.positive, position);
                let back = transform(&spec.negative, there);
                assert_eq!(
                    back, position,
                    "negative does not invert positive for {group} at {position:?}"
                );
            }
        }
    }

    #[test]
    fn test_transforms_stay_on_lattice() {
        for group in SliceGroup::iter() {
            let spec = group.spec();
            for position in lattice() {
                for matrix in [&spec.positive, &spec.negative] {
                    let (x, y, z) = transform(matrix, position);
                    assert!(
                        (-1..=1).contains(&x) && (-1..=1).contains(&y) && (-1..=1).contains(&z),
                        "{group} maps {position:?} off the lattice to ({x},{y},{z})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_turn_preserves_layer_coordinate() {
        for group in SliceGroup::iter() {
            let spec = group.spec();
            let pick = |(x, y, z): Coord| match group.axis() {
                Axis::X => x,
                Axis::Y => y,
                Axis::Z => z,
            };
            for position in lattice().filter(|&p| pick(p) == group.layer()) {
                let turned = transform(&spec.positive, position);
                assert_eq!(
                    pick(turned),
                    group.layer(),
                    "{group} moves {position:?} out of its own layer"
                );
            }
        }
    }

    #[test]
    fn test_middle_layers_reuse_outer_geometry() {
        // the observed table reuses up/right/front geometry for the middle
        // layers; pin it so a well-meaning "fix" cannot slip in silently
        let pairs = [
            (SliceGroup::Equator, SliceGroup::Up),
            (SliceGroup::CentreFront, SliceGroup::Right),
            (SliceGroup::CentreRight, SliceGroup::Front),
        ];
        for (middle, outer) in pairs {
            assert_eq!(middle.spec().positive, outer.spec().positive);
            assert_eq!(middle.spec().negative, outer.spec().negative);
            assert_eq!(middle.spec().axis, outer.spec().axis);
        }
    }

    #[test]
    fn test_right_positive_matches_known_mapping() {
        let spec = SliceGroup::Right.spec();
        assert_eq!(transform(&spec.positive, (1, 1, 1)), (1, -1, 1));
    }

    #[test]
    fn test_classify_samples() {
        use SliceGroup::*;
        assert_eq!(classify((1, 1, 1)), [Right, Back, Up]);
        assert_eq!(classify((-1, -1, -1)), [Left, Front, Down]);
        assert_eq!(classify((0, 0, 0)), [CentreFront, CentreRight, Equator]);
    }

    #[test]
    fn test_axis_slices_agree_with_group_axis() {
        for axis in Axis::iter() {
            for (layer, group) in [-1, 0, 1].into_iter().zip(axis.slices()) {
                assert_eq!(group.axis(), axis);
                assert_eq!(group.layer(), layer);
            }
        }
    }

    #[test]
    fn test_group_names_parse_back() {
        for group in SliceGroup::iter() {
            let parsed: SliceGroup = group.to_string().parse().unwrap();
            assert_eq!(parsed, group);
        }
    }
}
