use crate::layout::LayoutMember;

/// options for the text report
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// print one line per array element instead of a single collapsed line
    pub expanded_arrays: bool,
    /// column where the offset/size/padding table starts
    pub alignment: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            expanded_arrays: true,
            alignment: 28,
        }
    }
}

/// render one layout tree as an indented struct listing
pub fn render_layout(root: &LayoutMember, options: ReportOptions) -> String {
    LayoutPrinter::new(options).render(root)
}

/// walks a layout tree and prints each member with its offset, size and
/// trailing padding aligned in a table on the right
pub struct LayoutPrinter {
    expanded_arrays: bool,
    alignment: usize,
    indentation: usize,
    out: String,
}

impl LayoutPrinter {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            expanded_arrays: options.expanded_arrays,
            alignment: options.alignment,
            indentation: 0,
            out: String::new(),
        }
    }

    pub fn render(mut self, root: &LayoutMember) -> String {
        self.push_aligned("", "offset size +pad\n");
        self.print_struct(root, None);
        self.out
    }

    fn indentation_string(&self) -> String {
        "    ".repeat(self.indentation)
    }

    fn push_text(&mut self, text: &str) {
        let indent = self.indentation_string();
        self.out.push_str(&indent);
        self.out.push_str(text);
    }

    fn push_aligned(&mut self, prefix: &str, suffix: &str) {
        let prefix = format!("{}{}", self.indentation_string(), prefix);
        let pad = self.alignment.saturating_sub(prefix.len()).max(1);
        self.out.push_str(&prefix);
        self.out.push_str(&" ".repeat(pad));
        self.out.push_str(suffix);
    }

    fn print_struct(&mut self, member: &LayoutMember, parent: Option<&LayoutMember>) {
        let keyword = if member.is_cbuffer { "cbuffer" } else { "struct" };
        self.push_text(&format!("{} {} {{\n", keyword, member.ty.name()));
        self.indentation += 1;
        for m in &member.submembers {
            self.print_member(m, Some(member));
        }
        self.indentation -= 1;

        if member.name.is_empty() {
            let table = off_size_pad(None, member.size, member.padding);
            self.push_aligned("};", &format!("{}\n", table));
            return;
        }

        match parent {
            // a collapsed array of structs prints the array node on the closer
            Some(p) if !self.expanded_arrays && p.ty.is_array() => {
                let closer = format!("}} {}[{}];", p.name, p.submembers.len());
                let table = off_size_pad(Some(p.offset), p.size, p.padding);
                self.push_aligned(&closer, &format!("{}\n", table));
            }
            _ => {
                // top-level cbuffers have no meaningful offset
                let offset = if member.is_cbuffer {
                    None
                } else {
                    Some(member.offset)
                };
                let closer = format!("}} {};", member.name);
                let table = off_size_pad(offset, member.size, member.padding);
                self.push_aligned(&closer, &format!("{}\n", table));
            }
        }
    }

    fn print_member(&mut self, member: &LayoutMember, parent: Option<&LayoutMember>) {
        if member.ty.is_struct() {
            self.print_struct(member, parent);
        } else if member.ty.is_array() {
            if self.expanded_arrays {
                for m in &member.submembers {
                    self.print_member(m, Some(member));
                }
            } else if let Some(first) = member.submembers.first() {
                self.print_member(first, Some(member));
            }
        } else {
            match parent {
                Some(p) if !self.expanded_arrays && p.ty.is_array() => {
                    let line = format!("{} {}[{}];", member.ty.name(), p.name, p.submembers.len());
                    let table = off_size_pad(Some(p.offset), p.size, p.padding);
                    self.push_aligned(&line, &format!("{}\n", table));
                }
                _ => {
                    let line = format!("{} {};", member.ty.name(), member.name);
                    let table = off_size_pad(Some(member.offset), member.size, member.padding);
                    self.push_aligned(&line, &format!("{}\n", table));
                }
            }
        }
    }
}

fn offset_string(offset: Option<usize>) -> String {
    match offset {
        Some(offset) => format!("{:>6}", offset),
        None => format!("{:>6}", ""),
    }
}

fn size_string(size: usize) -> String {
    format!("{:>4}", size)
}

fn padding_string(padding: usize) -> String {
    if padding > 0 {
        format!("+{:>2}", padding)
    } else {
        String::new()
    }
}

fn off_size_pad(offset: Option<usize>, size: usize, padding: usize) -> String {
    format!(
        "{} {} {}",
        offset_string(offset),
        size_string(size),
        padding_string(padding)
    )
}
