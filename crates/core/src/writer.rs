use crate::types::Declaration;

const INDENT: &str = "  ";

/// 带缩进状态的 CSS 文本写入器
///
/// 压缩模式下不输出空白，且闭合括号前不保留分号。
pub(crate) struct CssWriter {
    out: String,
    minify: bool,
    depth: usize,
}

impl CssWriter {
    pub(crate) fn new(minify: bool) -> Self {
        Self {
            out: String::new(),
            minify,
            depth: 0,
        }
    }

    fn indent(&mut self) {
        if !self.minify {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
        }
    }

    /// 打开一个块（at-rule 或选择器）
    pub(crate) fn open(&mut self, prelude: &str) {
        self.indent();
        if self.minify {
            self.out.push_str(&prelude.replace(", ", ","));
            self.out.push('{');
        } else {
            self.out.push_str(prelude);
            self.out.push_str(" {\n");
        }
        self.depth += 1;
    }

    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.minify {
            if self.out.ends_with(';') {
                self.out.pop();
            }
            self.out.push('}');
        } else {
            self.indent();
            self.out.push_str("}\n");
        }
    }

    pub(crate) fn declarations(&mut self, decls: &[Declaration]) {
        for decl in decls {
            if !self.minify {
                if let Some(comment) = &decl.comment {
                    self.indent();
                    self.out.push_str(&format!("/* {} */\n", comment));
                }
            }
            self.indent();
            self.out.push_str(&decl.to_css(self.minify));
            self.out.push(';');
            if !self.minify {
                self.out.push('\n');
            }
        }
    }

    /// 输出 `selector { decls }`；没有声明时不输出
    pub(crate) fn rule(&mut self, selector: &str, decls: &[Declaration]) {
        if decls.is_empty() {
            return;
        }
        self.open(selector);
        self.declarations(decls);
        self.close();
    }

    pub(crate) fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}
