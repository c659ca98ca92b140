use std::cmp::Ordering;

use crate::simulation_engine::models::Child;

/// Link every pair of children in one family and tally their age order.
///
/// Relatives are stored as indices into `children`, so the relation never
/// owns a sibling. Children born the same day are linked but counted as
/// neither older nor younger.
pub fn resolve_relationships(children: &mut [Child]) {
    let has_relative = children.len() > 1;
    for child in children.iter_mut() {
        child.has_relative = has_relative;
    }

    for i in 0..children.len() {
        for j in i + 1..children.len() {
            let (head, tail) = children.split_at_mut(j);
            link(i, &mut head[i], j, &mut tail[0]);
        }
    }
}

fn link(i: usize, first: &mut Child, j: usize, second: &mut Child) {
    first.relatives.insert(j);
    second.relatives.insert(i);

    match first.birth_date.cmp(&second.birth_date) {
        Ordering::Less => {
            first.younger.add(second.sex);
            second.older.add(first.sex);
        }
        Ordering::Greater => {
            first.older.add(second.sex);
            second.younger.add(first.sex);
        }
        Ordering::Equal => {}
    }
}
