use crate::layout::member::LayoutMember;

/// True when both layout trees place the same members at the same offsets
/// with the same effective sizes.
///
/// Array nodes themselves are skipped (their elements are compared), and a
/// struct's effective size excludes any trailing end padding folded into its
/// size, even padding inherited from a nested last member. Whether padding
/// is accounted inside a struct or after it is not a semantic difference, so
/// constant-buffer and structured layouts of the same declaration can
/// compare equal. Symmetric in its arguments.
pub fn layouts_equivalent(a: &LayoutMember, b: &LayoutMember) -> bool {
    let mut left = Vec::new();
    flatten(a, &mut left);
    let mut right = Vec::new();
    flatten(b, &mut right);

    left == right
}

fn flatten(member: &LayoutMember, out: &mut Vec<(String, usize, usize)>) {
    if member.ty.is_array() {
        for sub in &member.submembers {
            flatten(sub, out);
        }
        return;
    }

    out.push((member.name.clone(), member.offset, effective_size(member)));
    for sub in &member.submembers {
        flatten(sub, out);
    }
}

/// Size with every byte of trailing end padding stripped, measured from the
/// member's start to where the content of its last leaf ends.
fn effective_size(member: &LayoutMember) -> usize {
    if member.submembers.is_empty() {
        return member.size;
    }
    content_end(member) - member.offset
}

fn content_end(member: &LayoutMember) -> usize {
    match member.submembers.last() {
        Some(last) => content_end(last),
        None => member.offset + member.size,
    }
}
