use std::{io, process::exit, str::FromStr};

use errata::FallibleExt;
use sarge::*;

mod log;
mod prompt;
mod status;

use prompt::Prompt;
use status::{Category, Style};

#[errata::catch]
fn main() {
    let mut parser = ArgumentParser::new();
    parser.add(arg!(flag, both, 'h', "help"));

    parser.add(arg!(str, both, 'm', "message"));
    parser.add(arg!(str, both, 't', "type"));
    parser.add(arg!(str, both, 's', "style"));
    parser.add(arg!(flag, both, 'i', "icon"));

    parser.add(arg!(flag, both, 'w', "meow"));

    parser.add(arg!(str, both, 'p', "prompt"));
    parser.add(arg!(str, both, 'q', "quit"));
    parser.add(arg!(str, both, 'n', "count"));

    let _remainder = match parser.parse() {
        Err(e) => {
            log::err("error (while parsing arguments)", e);
            exit(1);
        }
        Ok(r) => r,
    };

    if get_flag!(parser, both, 'h', "help") {
        let types: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        let styles: Vec<&str> = Style::ALL.iter().map(|s| s.name()).collect();

        println!("{} [options]", parser.binary.unwrap_or("purr".to_string()));
        println!("  -h /    --help           : prints this help message");
        println!("  -m / --message <text>    : prints a single status message and exits");
        println!("  -t /    --type <type>    : message type, one of {}", types.join(", "));
        println!("                             (default: notice)");
        println!("  -s /   --style <style>   : {}, 1 colors the tag, 2 the whole line", styles.join(" or "));
        println!("                             (default: 1)");
        println!("  -i /    --icon           : prefixes the message with an icon");
        println!("  -w /    --meow           : meow!");
        println!("  -p /  --prompt <text>    : prompt shown before each number");
        println!("  -q /    --quit <word>    : stops reading when <word> is entered");
        println!("  -n /   --count <n>       : stops reading after <n> lines");
        println!("                           without -m, reads numbers from stdin");

        exit(0);
    }

    if get_flag!(parser, both, 'w', "meow") {
        println!("meow!");
        exit(0);
    }

    if let Some(ArgValue::String(message)) = get_val!(parser, both, 'm', "message") {
        let kind = match get_val!(parser, both, 't', "type") {
            Some(ArgValue::String(t)) => t,
            _ => Category::Notice.name().to_string(),
        };
        let style = match get_val!(parser, both, 's', "style") {
            Some(ArgValue::String(s)) => s,
            _ => Style::Tag.name().to_string(),
        };

        // Unknown values still print nothing on stdout; just say why on stderr.
        if let Err(e) = Category::from_str(&kind) {
            log::warn(e);
        }
        if let Err(e) = Style::from_str(&style) {
            log::warn(e);
        }

        status::render(message, &kind, &style, get_flag!(parser, both, 'i', "icon"));
        exit(0);
    }

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout().lock());

    if let Some(ArgValue::String(text)) = get_val!(parser, both, 'p', "prompt") {
        prompt = prompt.with_prompt(text);
    }

    if let Some(ArgValue::String(word)) = get_val!(parser, both, 'q', "quit") {
        prompt = prompt.until(word);
    }

    if let Some(ArgValue::String(count)) = get_val!(parser, both, 'n', "count") {
        let count = count.parse::<usize>().unwrap_or_else(|e| {
            log::err(format_args!("invalid count `{count}`"), e);
            exit(1);
        });
        prompt = prompt.limit(count);
    }

    let handled = prompt.run().fail("stopped reading numbers");
    log::info(format_args!("handled {handled} line(s), bye"));
}
