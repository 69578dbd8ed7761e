use std::ops::Range;

use log::debug;
use terracast_algebra::Vec3;
use terracast_geometry::Box3;

use crate::utils::{bounding_from_build_source, BuildPrimitive, TreeBuildOption};

pub struct OcTreeNode {
  pub bounding: Box3<f64>,
  pub primitive_range: Range<usize>,
  /// primitives kept at this node because they fit no single child octant
  /// occupy primitive_range.start..self_primitive_end. a leaf keeps its
  /// whole range here.
  pub self_primitive_end: usize,
  pub depth: usize,
  pub self_index: usize,
  pub child: Option<[usize; 8]>,
}

impl OcTreeNode {
  pub fn is_leaf(&self) -> bool {
    self.child.is_none()
  }

  pub fn self_primitive_range(&self) -> Range<usize> {
    self.primitive_range.start..self.self_primitive_end
  }
}

/// flat-array octree over axis aligned boxes. every primitive lives in
/// exactly one node's self range, so a filtered traversal visits each
/// candidate at most once.
pub struct OcTree {
  pub nodes: Vec<OcTreeNode>,
  pub sorted_primitive_index: Vec<usize>,
}

impl OcTree {
  pub fn new(source: impl ExactSizeIterator<Item = Box3<f64>>, option: &TreeBuildOption) -> Self {
    // prepare build source;
    let (mut index_list, primitives): (Vec<usize>, Vec<BuildPrimitive<Box3<f64>>>) = source
      .enumerate()
      .map(|(i, b)| (i, BuildPrimitive::new(b)))
      .unzip();

    // prepare root
    let root_bbox = bounding_from_build_source(&index_list, &primitives, 0..index_list.len());

    let mut nodes = vec![OcTreeNode {
      bounding: root_bbox,
      primitive_range: 0..index_list.len(),
      self_primitive_end: index_list.len(),
      depth: 0,
      self_index: 0,
      child: None,
    }];

    Self::build(option, &primitives, &mut index_list, &mut nodes, 0);

    debug!(
      "octree built: {} primitives, {} nodes",
      index_list.len(),
      nodes.len()
    );

    Self {
      nodes,
      sorted_primitive_index: index_list,
    }
  }

  fn build(
    option: &TreeBuildOption,
    build_source: &[BuildPrimitive<Box3<f64>>],
    index_source: &mut [usize],
    nodes: &mut Vec<OcTreeNode>,
    node_index: usize,
  ) {
    let (range, depth, bounding) = {
      let node = &nodes[node_index];
      (node.primitive_range.clone(), node.depth, node.bounding)
    };

    if !option.should_continue(range.len(), depth) {
      return;
    }

    let center = bounding.center();
    let sub_boxes: [Box3<f64>; 8] = std::array::from_fn(|i| compute_sub_space(i, bounding));

    let mut partitions: [Vec<usize>; 8] = Default::default();
    let mut crossed = Vec::new();
    for &p in index_source.get(range.clone()).unwrap() {
      match classify_primitive(&sub_boxes, center, &build_source[p]) {
        Some(i) => partitions[i].push(p),
        None => crossed.push(p),
      }
    }

    let mut write = range.start;
    for &p in crossed.iter().chain(partitions.iter().flatten()) {
      index_source[write] = p;
      write += 1;
    }

    nodes[node_index].self_primitive_end = range.start + crossed.len();

    let mut child = [0; 8];
    let mut child_start = range.start + crossed.len();
    for (i, partition) in partitions.iter().enumerate() {
      let child_range = child_start..child_start + partition.len();
      child_start = child_range.end;

      let child_index = nodes.len();
      child[i] = child_index;
      nodes.push(OcTreeNode {
        bounding: sub_boxes[i],
        primitive_range: child_range.clone(),
        self_primitive_end: child_range.end,
        depth: depth + 1,
        self_index: child_index,
        child: None,
      });
      Self::build(option, build_source, index_source, nodes, child_index);
    }
    nodes[node_index].child = Some(child);
  }

  /// visit nodes whose branch filter passes, handing every visited node's
  /// own primitive indices to the primitive visitor.
  pub fn traverse(
    &self,
    mut branch_enter_visitor: impl FnMut(&OcTreeNode) -> bool,
    mut primitive_visitor: impl FnMut(&[usize]),
  ) {
    let mut stack = vec![0];
    while let Some(index) = stack.pop() {
      let node = &self.nodes[index];
      if node.primitive_range.is_empty() {
        continue;
      }
      if !branch_enter_visitor(node) {
        continue;
      }
      primitive_visitor(&self.sorted_primitive_index[node.self_primitive_range()]);
      if let Some(children) = node.child {
        stack.extend(children);
      }
    }
  }
}

fn compute_sub_space(i: usize, all_bounding: Box3<f64>) -> Box3<f64> {
  let center = all_bounding.center();
  let half_size = all_bounding.half_size();
  let dir = Vec3::new(
    if i & 1 == 0 { -1.0 } else { 1.0 },
    if i & 2 == 0 { -1.0 } else { 1.0 },
    if i & 4 == 0 { -1.0 } else { 1.0 },
  );
  Box3::new_from_center(center + half_size * dir * 0.5, half_size * 0.5)
}

fn classify_primitive(
  children_bounding: &[Box3<f64>; 8],
  parent_center: Vec3<f64>,
  p: &BuildPrimitive<Box3<f64>>,
) -> Option<usize> {
  let mut i: usize = 0;
  i += if p.center.x < parent_center.x { 0 } else { 1 };
  i += if p.center.y < parent_center.y { 0 } else { 2 };
  i += if p.center.z < parent_center.z { 0 } else { 4 };

  children_bounding[i].contains_box(&p.bounding).then_some(i)
}

#[cfg(test)]
mod test {
  use std::collections::HashSet;

  use terracast_geometry::{IntersectAble, Ray3};

  use super::*;
  use crate::utils::generate_boxes_in_space;

  #[test]
  fn build_keeps_every_primitive_exactly_once() {
    const COUNT: usize = 512;
    let boxes = generate_boxes_in_space(COUNT, 100., 2.);
    let tree = OcTree::new(
      boxes.iter().cloned(),
      &TreeBuildOption {
        bin_size: 4,
        max_tree_depth: 10,
      },
    );

    assert_eq!(tree.sorted_primitive_index.len(), COUNT);
    assert_eq!(
      HashSet::<usize>::from_iter(tree.sorted_primitive_index.iter().cloned()).len(),
      COUNT
    );

    // own ranges partition the whole index list
    let mut owned = 0;
    tree.traverse(|_| true, |primitives| owned += primitives.len());
    assert_eq!(owned, COUNT);

    // a leaf owns its entire range
    for node in tree.nodes.iter().filter(|n| n.is_leaf()) {
      assert_eq!(node.self_primitive_range(), node.primitive_range);
    }
  }

  #[test]
  fn node_bounding_contains_owned_primitives() {
    let boxes = generate_boxes_in_space(256, 50., 1.);
    let tree = OcTree::new(
      boxes.iter().cloned(),
      &TreeBuildOption {
        bin_size: 8,
        max_tree_depth: 6,
      },
    );

    for node in &tree.nodes {
      for &p in &tree.sorted_primitive_index[node.self_primitive_range()] {
        assert!(node.bounding.contains_box(&boxes[p]));
      }
    }
  }

  #[test]
  fn filtered_traversal_never_drops_a_ray_hit() {
    let boxes = generate_boxes_in_space(512, 100., 2.);
    let tree = OcTree::new(boxes.iter().cloned(), &TreeBuildOption::default());

    let rays = [
      Ray3::new(Vec3::splat(-10.0f64), Vec3::splat(1.0).normalize()),
      Ray3::new(Vec3::new(50.0, -10.0, 50.0), Vec3::new(0.0, 1.0, 0.0)),
      Ray3::new(Vec3::new(0.0, 120.0, 0.0), Vec3::new(0.7, -0.7, 0.14).normalize()),
    ];

    for ray in rays {
      let mut visited = HashSet::new();
      tree.traverse(
        |node| node.bounding.intersect(&ray, &()),
        |primitives| visited.extend(primitives.iter().cloned()),
      );

      for (i, b) in boxes.iter().enumerate() {
        if b.intersect(&ray, &()) {
          assert!(visited.contains(&i), "hit primitive {} was filtered out", i);
        }
      }
    }
  }

  #[test]
  fn empty_source_builds_an_empty_tree() {
    let tree = OcTree::new(std::iter::empty::<Box3<f64>>(), &TreeBuildOption::default());
    let mut visited = 0;
    tree.traverse(|_| true, |primitives| visited += primitives.len());
    assert_eq!(visited, 0);
  }
}
