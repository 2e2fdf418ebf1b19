use colored::{ColoredString, Colorize};
use uniroll::api::{CmdMessage, MessageLevel};
use uniroll::config::RosterConfig;
use uniroll::model::{Grade, Student, Subject, MAX_SUBJECTS};
use uniroll::view::{bracket_list, format_mark, RosterView};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn colored_grade(grade: Grade) -> ColoredString {
    let text = grade.as_str();
    match grade {
        Grade::HighDistinction => text.magenta().bold(),
        Grade::Distinction | Grade::Credit => text.cyan(),
        Grade::Pass => text.yellow(),
        Grade::Fail => text.red(),
    }
}

pub(super) fn print_subjects(subjects: &[Subject]) {
    for subject in subjects {
        println!(
            "[ Subject::{} -- mark = {} -- grade = {} ]",
            subject.id(),
            subject.mark(),
            colored_grade(subject.grade())
        );
    }
}

pub(super) fn print_student(student: &Student) {
    let status = if student.status() {
        "PASS".green()
    } else {
        "FAIL".red()
    };
    println!("{} ({})", student.name.bold(), student.id());
    println!("  Email:    {}", student.email);
    println!(
        "  Subjects: {} out of {}",
        student.enrolled_count(),
        MAX_SUBJECTS
    );
    println!(
        "  Overall:  {} {} {}",
        format_mark(student.overall()),
        colored_grade(student.overall_grade()),
        status
    );
}

pub(super) fn print_view(view: &RosterView) {
    if view.is_empty() {
        return;
    }
    match view {
        RosterView::Plain(_) => {
            for line in view.lines() {
                println!("{}", line);
            }
        }
        RosterView::ByGrade(lines) => {
            for line in lines {
                println!("{} --> [{}]", colored_grade(line.grade), line);
            }
        }
        RosterView::PassFail { fail, pass } => {
            println!("{} --> {}", "FAIL".red(), bracket_list(fail));
            println!("{} --> {}", "PASS".green(), bracket_list(pass));
        }
    }
}

pub(super) fn print_config(config: &RosterConfig) {
    for key in RosterConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
