//! 删除前的交互确认

use std::io::{self, BufRead, Write};

/// 询问是否删除全部 `count` 个账户
///
/// 去掉行尾换行后，只有 `y`/`Y` 视为同意；带空白的回答、空行、其他输入或输入结束均视为拒绝。
pub fn confirm_deletion<R, W>(count: usize, input: &mut R, out: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(out, "Delete all {} account(s)? [y/N]: ", count)?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        // stdin 已关闭，补一个换行保持输出整齐
        writeln!(out)?;
        return Ok(false);
    }

    Ok(answer
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case("y"))
}
